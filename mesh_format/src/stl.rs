//! ```text
//! solid name
//! facet normal ni nj nk
//!     outer loop
//!         vertex v1x v1y v1z
//!         vertex v2x v2y v2z
//!         vertex v3x v3y v3z
//!     endloop
//! endfacet
//! endsolid name
//! ```
//!
//! Every statement sits on its own line. Lines are split on whitespace and
//! both the keywords and the token count have to match exactly.

use std::io::{self, BufRead, Write};

use common::geometry::{Facet, Pos};
use tracing::{debug, warn};

use crate::{ParseError, Solid};

/// What the reader found after the header.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Facet(Facet),
    /// The `endsolid` line along with the name it carried.
    EndSolid(String),
}

/// Line oriented reader over an ASCII STL stream.
pub struct Reader<R> {
    inner: R,
    line: String,
    line_number: usize,
}

impl<R: BufRead> Reader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            line_number: 0,
        }
    }

    /// Reads the `solid <name>` line, returning the name.
    pub fn read_header(&mut self) -> Result<String, ParseError> {
        self.read_line()?;
        let tokens = self.line.split_whitespace().collect::<Vec<_>>();
        match tokens.as_slice() {
            ["solid", name] => Ok(name.to_string()),
            _ => Err(self.malformed()),
        }
    }

    /// Reads either one complete facet block or the closing `endsolid`.
    pub fn next_statement(&mut self) -> Result<Statement, ParseError> {
        self.read_line()?;
        let tokens = self.line.split_whitespace().collect::<Vec<_>>();
        let normal = match tokens.as_slice() {
            ["endsolid", name] => return Ok(Statement::EndSolid(name.to_string())),
            ["facet", "normal", x, y, z] => self.vector([x, y, z])?,
            _ => return Err(self.malformed()),
        };

        self.expect(&["outer", "loop"])?;
        let vertices = [self.vertex()?, self.vertex()?, self.vertex()?];
        self.expect(&["endloop"])?;
        self.expect(&["endfacet"])?;

        Ok(Statement::Facet(Facet::new(normal, vertices)))
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_line(&mut self) -> Result<(), ParseError> {
        self.line.clear();
        if self.inner.read_line(&mut self.line)? == 0 {
            return Err(ParseError::UnexpectedEof {
                line_number: self.line_number,
            });
        }

        self.line_number += 1;
        Ok(())
    }

    fn expect(&mut self, keywords: &[&str]) -> Result<(), ParseError> {
        self.read_line()?;
        if self.line.split_whitespace().eq(keywords.iter().copied()) {
            return Ok(());
        }

        Err(self.malformed())
    }

    fn vertex(&mut self) -> Result<Pos, ParseError> {
        self.read_line()?;
        let tokens = self.line.split_whitespace().collect::<Vec<_>>();
        match tokens.as_slice() {
            ["vertex", x, y, z] => self.vector([x, y, z]),
            _ => Err(self.malformed()),
        }
    }

    fn vector(&self, components: [&&str; 3]) -> Result<Pos, ParseError> {
        let [x, y, z] = components.map(|x| {
            x.parse::<f32>().map_err(|source| ParseError::Number {
                line_number: self.line_number,
                line: self.line.trim().to_owned(),
                source,
            })
        });
        let vector = Pos::new(x?, y?, z?);

        if !vector.iter().all(|x| x.is_finite()) {
            return Err(ParseError::NotFinite {
                line_number: self.line_number,
                line: self.line.trim().to_owned(),
            });
        }
        Ok(vector)
    }

    fn malformed(&self) -> ParseError {
        ParseError::Format {
            line_number: self.line_number,
            line: self.line.trim().to_owned(),
        }
    }
}

/// Parses a whole solid. Reading stops at the `endsolid` line, anything after
/// it is left unread.
pub fn parse<R: BufRead>(reader: R) -> Result<Solid, ParseError> {
    let mut reader = Reader::new(reader);
    let name = reader.read_header()?;

    let mut facets = Vec::new();
    loop {
        match reader.next_statement()? {
            Statement::Facet(facet) => facets.push(facet),
            Statement::EndSolid(end) => {
                if end != name {
                    warn!("Solid `{name}` closed as `{end}`");
                }
                break;
            }
        }
    }

    debug!(
        "Parsed solid `{name}` with {} facets over {} lines",
        facets.len(),
        reader.line_number()
    );
    Ok(Solid { name, facets })
}

/// Writes a solid in the same layout [`parse`] reads. The name must not
/// contain whitespace for the output to be readable again.
pub fn write<W: Write>(solid: &Solid, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "solid {}", solid.name)?;
    for facet in solid.facets.iter() {
        let n = facet.normal;
        writeln!(writer, "  facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in facet.vertices.iter() {
            writeln!(writer, "      vertex {} {} {}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {}", solid.name)?;
    Ok(())
}
