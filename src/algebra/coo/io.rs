#![allow(non_snake_case)]

use crate::algebra::{CooMatrix, FloatT};
use std::io::{Result, Write};

// this core is single process, so the local rank is always 0 and the
// rank filter below only suppresses output for an explicit nonzero rank
const MY_RANK: usize = 0;

impl<T> CooMatrix<T>
where
    T: FloatT,
{
    /// Writes up to `max_elems` nonzeros as three 1-based index/value
    /// sequences, suitable for pasting into a numeric scripting
    /// environment:
    ///
    /// ```text
    /// iRow=[1 ; 1 ; 2 ; ];
    /// jCol=[1 ; 2 ; 2 ; ];
    /// v=[2.0e0 ; 3.0e0 ; 4.0e0 ; ];
    /// ```
    ///
    /// With `label == None` a one-line header with the matrix dimensions
    /// is written instead.  Output is produced only when `rank` is `None`
    /// or equal to the local rank.
    pub fn write_coords(
        &self,
        out: &mut dyn Write,
        label: Option<&str>,
        max_elems: Option<usize>,
        rank: Option<usize>,
    ) -> Result<()> {
        if rank.is_some() && rank != Some(MY_RANK) {
            return Ok(());
        }

        let max_elems = max_elems.unwrap_or(self.nnz()).min(self.nnz());

        match label {
            Some(msg) => write!(out, "{} ", msg)?,
            None => writeln!(
                out,
                "matrix of size {} {} and nonzeros {}, printing {} elems",
                self.m,
                self.n,
                self.nnz(),
                max_elems
            )?,
        }

        write!(out, "iRow=[")?;
        for row in &self.rowval[..max_elems] {
            write!(out, "{} ; ", row + 1)?;
        }
        writeln!(out, "];")?;

        write!(out, "jCol=[")?;
        for col in &self.colval[..max_elems] {
            write!(out, "{} ; ", col + 1)?;
        }
        writeln!(out, "];")?;

        write!(out, "v=[")?;
        for v in &self.nzval[..max_elems] {
            write!(out, "{:.16e} ; ", v)?;
        }
        writeln!(out, "];")?;

        Ok(())
    }
}

impl<T> std::fmt::Display for CooMatrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut buf = Vec::new();
        self.write_coords(&mut buf, None, None, None)
            .map_err(|_| std::fmt::Error)?;
        let s = std::str::from_utf8(&buf).map_err(|_| std::fmt::Error)?;
        f.write_str(s)
    }
}

#[test]
fn test_write_coords() {
    // A =
    //[2. 3.]
    //[ ⋅ 4.]
    let A = CooMatrix::new(2, 2, vec![0, 0, 1], vec![0, 1, 1], vec![2., 3., 4.]);

    let mut buf = Vec::new();
    A.write_coords(&mut buf, Some("A"), None, None).unwrap();
    let s = String::from_utf8(buf).unwrap();
    assert!(s.starts_with("A "));
    assert!(s.contains("iRow=[1 ; 1 ; 2 ; ];"));
    assert!(s.contains("jCol=[1 ; 2 ; 2 ; ];"));

    // header line with dimensions when no label is given
    let mut buf = Vec::new();
    A.write_coords(&mut buf, None, None, None).unwrap();
    let s = String::from_utf8(buf).unwrap();
    assert!(s.starts_with("matrix of size 2 2 and nonzeros 3, printing 3 elems"));

    // truncation to max_elems
    let mut buf = Vec::new();
    A.write_coords(&mut buf, Some("A"), Some(2), None).unwrap();
    let s = String::from_utf8(buf).unwrap();
    assert!(s.contains("iRow=[1 ; 1 ; ];"));

    // rank filter suppresses output for nonlocal ranks
    let mut buf = Vec::new();
    A.write_coords(&mut buf, Some("A"), None, Some(1)).unwrap();
    assert!(buf.is_empty());

    let mut buf = Vec::new();
    A.write_coords(&mut buf, Some("A"), None, Some(0)).unwrap();
    assert!(!buf.is_empty());
}
