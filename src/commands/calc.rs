use crate::cli::{CalcArgs, OutputFormat};
use crate::config::Config;
use crate::core::data::ArithmeticRequest;
use crate::core::operations::Operations;
use crate::core::traits::{Arithmetic, ResultDisplay};
use crate::utils::parse_operand;
use anyhow::Result;
use tracing::debug;

pub fn handle_calc_command(
    config: Config,
    args: &CalcArgs,
    format: Option<&OutputFormat>,
) -> Result<()> {
    let operations = Operations::new(config);

    let request = ArithmeticRequest::new(
        parse_operand(&args.lhs),
        parse_operand(&args.rhs),
        args.operator.as_str(),
    );
    debug!(?request, "calc request");

    let result = operations.calculate(&request)?;
    operations.print_calculation(&request, result, &operations.output_format(format))?;

    Ok(())
}
