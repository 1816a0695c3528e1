use clap::Parser;

use super::Fixture;

/// Builds a `genmap-rs` command line, targeting a test-data `.gen` file, and writing to a temporary output file.
#[derive(Default)]
pub struct GenmapRunnerBuilder {
    input        : Option<String>,
    order        : Option<String>,
    reliable_only: bool,
    overwrite    : bool,
}

impl GenmapRunnerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(mut self, input: &str) -> Self {
        self.input = Some(input.to_string());
        self
    }

    pub fn set_order(mut self, order: &str) -> Self {
        self.order = Some(order.to_string());
        self
    }

    pub fn reliable_only(mut self) -> Self {
        self.reliable_only = true;
        self
    }

    pub fn overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    pub fn build(self) -> Result<GenmapRunner, String> {
        let input  = Fixture::copy(&self.input.ok_or("Missing input file")?);
        let output = Fixture::blank("linkage-map.txt");

        let mut args = vec!["genmap-rs".to_string(), input.to_string(), "--output".to_string(), output.to_string()];
        if self.reliable_only {
            args.push("--reliable-only".to_string());
        }
        if self.overwrite {
            args.push("--overwrite".to_string());
        }
        if let Some(order) = self.order {
            args.push("--order".to_string());
            args.extend(order.split_whitespace().map(str::to_string));
        }
        Ok(GenmapRunner { args, _input: input, output })
    }
}

pub struct GenmapRunner {
    args  : Vec<String>,
    _input: Fixture,
    output: Fixture,
}

impl GenmapRunner {
    pub fn run(&self) -> anyhow::Result<()> {
        let cli = parser::Cli::try_parse_from(&self.args)?;
        genmap_rs::run(cli)
    }

    /// Lines of the written linkage map.
    pub fn output_lines(&self) -> Vec<String> {
        std::fs::read_to_string(&*self.output)
            .unwrap_or_else(|_| panic!("Failed to open {}", self.output))
            .lines()
            .map(str::to_string)
            .collect()
    }
}
