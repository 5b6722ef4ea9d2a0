use crate::cli::{OutputFormat, SquaresArgs};
use crate::config::Config;
use crate::core::operations::Operations;
use crate::core::traits::{ResultDisplay, SequenceGeneration};
use crate::utils::parse_operand;
use anyhow::Result;

pub fn handle_squares_command(
    config: Config,
    args: &SquaresArgs,
    format: Option<&OutputFormat>,
) -> Result<()> {
    let operations = Operations::new(config);

    // Non-numeric entries become NaN and propagate through squaring
    let numbers: Vec<f64> = args.numbers.iter().map(|n| parse_operand(n)).collect();

    let report = operations.square_numbers(Some(numbers.as_slice()))?;
    operations.print_squares(&report, &operations.output_format(format))?;

    Ok(())
}
