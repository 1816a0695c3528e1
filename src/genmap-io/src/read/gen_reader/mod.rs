use std::{fs::File, io::{BufRead, BufReader}, path::Path, str::FromStr};

use located_error::prelude::*;
use log::{debug, info};
use pedigree::{Allele, OrganismId, OrganismRecord, Sex};

mod error;
pub use error::GenReaderError;

/// Parsed contents of a `.gen` file.
/// - `loci`   : locus names, in file order.
/// - `records`: raw organism records, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenFile {
    pub loci   : Vec<String>,
    pub records: Vec<OrganismRecord>,
}

/// Line-oriented reader for `.gen` pedigree files. Blank lines are ignored.
/// 
/// ```text
/// <number of families>           (ignored)
/// <M>
/// <M locus names>
/// <family number>                (ignored)
/// <N>
/// N times:
///   <id> <parent1> <parent2> <sex>
///   <2*M allele codes (0|1|2)>
/// ```
pub struct GenReader<'a> {
    source     : Box<dyn BufRead + 'a>,
    line_number: usize,
}

impl<'a> GenReader<'a> {
    /// Open a `.gen` file.
    /// 
    /// # Errors
    /// - if `path` targets an invalid location (`FileNotFound` or `PermissionDenied`)
    pub fn new(path: &Path) -> Result<GenReader<'a>> {
        use GenReaderError::OpenFile;
        File::open(path)
            .map(|file| Self::from_reader(BufReader::new(file)))
            .map_err(|e| OpenFile(path.to_path_buf(), e))
            .loc("While attempting to create a new GenReader")
    }

    /// Read `.gen` contents from any buffered source.
    pub fn from_reader(source: impl BufRead + 'a) -> Self {
        Self { source: Box::new(source), line_number: 0 }
    }

    /// Parse the whole file.
    /// 
    /// # Errors
    /// - `GenReaderError` on any malformed, missing or surnumerary token. The offending line number is reported.
    pub fn read(mut self) -> Result<GenFile> {
        self.next_line("the number of families")?;
        let n_loci: usize = self.next_int("the number of loci")?;
        let loci = self.next_line("locus names")?;
        if loci.len() != n_loci {
            return Err(GenReaderError::LocusCount { line: self.line_number, expected: n_loci, got: loci.len() })
                .loc("While parsing locus names")
        }

        self.next_line("the family number")?;
        let n_organisms: usize = self.next_int("the number of organisms")?;
        debug!("Expecting {n_organisms} organism(s) over {n_loci} loci");

        let records = (0..n_organisms)
            .map(|_| self.next_record(n_loci))
            .collect::<Result<Vec<OrganismRecord>>>()?;

        info!("Parsed {} organism record(s).", records.len());
        Ok(GenFile { loci, records })
    }

    /// Parse a single organism: a 4-field header line, followed by a genotype line.
    fn next_record(&mut self, n_loci: usize) -> Result<OrganismRecord> {
        use GenReaderError::{OrganismFields, GenotypeLength, InvalidAllele, NullOrganismId};
        let header = self.next_line("an organism header")?;
        let line = self.line_number;
        let [id, first, second, sex] = header.as_slice() else {
            return Err(OrganismFields { line, got: header.len() }).loc("While parsing organism header")
        };

        let id = OrganismId::new(self.parse_int(id)?)
            .ok_or(NullOrganismId { line })
            .loc("While parsing organism header")?;
        let parents = [self.parse_int(first)?, self.parse_int(second)?].map(OrganismId::new);
        let sex = Sex::from_code(self.parse_int(sex)?);

        let calls = self.next_line("a genotype line")?;
        let line = self.line_number;
        if calls.len() != 2 * n_loci {
            return Err(GenotypeLength { line, expected: 2 * n_loci, got: calls.len() })
                .with_loc(|| format!("While parsing the genotype of organism {id}"))
        }
        let genotype = calls.iter()
            .map(|call| Allele::parse_call(call).map_err(|source| InvalidAllele { line, source }))
            .collect::<Result<Vec<Option<Allele>>, _>>()
            .with_loc(|| format!("While parsing the genotype of organism {id}"))?;

        Ok(OrganismRecord { id, parents, sex, genotype })
    }

    /// Fetch the whitespace-separated tokens of the next non-blank line.
    fn next_line(&mut self, expected: &'static str) -> Result<Vec<String>> {
        use GenReaderError::{ReadLine, UnexpectedEof};
        let mut buf = String::new();
        loop {
            buf.clear();
            let bytes = self.source.read_line(&mut buf)
                .map_err(|e| ReadLine(self.line_number + 1, e))
                .loc("While reading .gen file")?;
            if bytes == 0 {
                return Err(UnexpectedEof { line: self.line_number, expected }).loc("While reading .gen file")
            }
            self.line_number += 1;
            if !buf.trim().is_empty() {
                return Ok(buf.split_whitespace().map(str::to_string).collect())
            }
        }
    }

    /// Fetch the next non-blank line, which must hold a single integer.
    fn next_int<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        match self.next_line(expected)?.as_slice() {
            [token] => self.parse_int(token),
            tokens  => Err(GenReaderError::InvalidInteger { line: self.line_number, token: tokens.join(" ") })
                .with_loc(|| format!("While parsing {expected}")),
        }
    }

    fn parse_int<T: FromStr>(&self, token: &str) -> Result<T> {
        token.parse::<T>()
            .map_err(|_| GenReaderError::InvalidInteger { line: self.line_number, token: token.to_string() })
            .loc("While parsing integer field")
    }
}
