use crate::adapters::Output;
use crate::domain::model::Cake;
use crate::utils::error::Result;
use std::io::Write;

/// Stateless formatter that renders a cake's details to an output target.
#[derive(Debug, Clone, Copy, Default)]
pub struct CakePrinter;

impl CakePrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_details(&self, cake: &Cake) -> String {
        format!(
            "Type:{} Layers:{} Ingredients: {}",
            cake.cake_type(),
            cake.layers(),
            cake.ingredients().join(" ")
        )
    }

    /// Prints to the console, or to the page element named by `selector`.
    /// The two targets are exclusive: a selector never also prints to the console.
    pub fn print_details<W: Write>(
        &self,
        cake: &Cake,
        output: &mut Output<W>,
        selector: Option<&str>,
    ) -> Result<()> {
        let details = self.format_details(cake);
        let sink = output.select(selector)?;
        sink.write_record(&details)?;

        tracing::debug!(
            "Printed {} cake to {}",
            cake.cake_type(),
            selector.unwrap_or("console")
        );
        Ok(())
    }
}
