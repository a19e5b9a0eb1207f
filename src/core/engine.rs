use crate::adapters::Output;
use crate::core::printer::CakePrinter;
use crate::domain::model::{Cake, CakeDefaults, CakeSpec};
use crate::domain::ports::OutputSink;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct BakeReport {
    pub cakes: Vec<Cake>,
    pub bake_lines: Vec<String>,
}

/// Resolves a batch of cake specs and prints each one in order.
pub struct BakeryEngine {
    defaults: CakeDefaults,
    printer: CakePrinter,
    announce: bool,
}

impl BakeryEngine {
    pub fn new(defaults: CakeDefaults) -> Self {
        Self {
            defaults,
            printer: CakePrinter::new(),
            announce: false,
        }
    }

    /// Also writes each cake's bake sentence to the console before its details.
    pub fn announcing(mut self, announce: bool) -> Self {
        self.announce = announce;
        self
    }

    pub fn defaults(&self) -> &CakeDefaults {
        &self.defaults
    }

    pub fn resolve(&self, specs: Vec<CakeSpec>) -> Vec<Cake> {
        specs
            .into_iter()
            .map(|spec| self.defaults.resolve(spec))
            .collect()
    }

    /// Bakes and prints every cake. With a selector, each cake replaces the
    /// element's text in turn, so the last one stays visible.
    pub fn run<W: Write>(
        &self,
        specs: Vec<CakeSpec>,
        output: &mut Output<W>,
        selector: Option<&str>,
    ) -> Result<BakeReport> {
        // A missing target must fail before anything reaches the console.
        output.select(selector)?;

        let cakes = self.resolve(specs);
        tracing::info!("Baking {} cakes", cakes.len());

        let mut bake_lines = Vec::with_capacity(cakes.len());
        for cake in &cakes {
            let line = cake.bake();
            tracing::info!("{}", line);
            if self.announce {
                output.console_mut().write_record(&line)?;
            }
            self.printer.print_details(cake, output, selector)?;
            bake_lines.push(line);
        }

        Ok(BakeReport { cakes, bake_lines })
    }
}

impl Default for BakeryEngine {
    fn default() -> Self {
        Self::new(CakeDefaults::default())
    }
}
