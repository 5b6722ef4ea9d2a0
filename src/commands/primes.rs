use crate::cli::{OutputFormat, PrimesArgs};
use crate::config::Config;
use crate::core::operations::Operations;
use crate::core::traits::{ResultDisplay, SequenceGeneration};
use anyhow::{Result, bail};

pub fn handle_primes_command(
    config: Config,
    args: &PrimesArgs,
    format: Option<&OutputFormat>,
) -> Result<()> {
    let operations = Operations::new(config);
    let format = operations.output_format(format);

    if let Some(number) = args.check {
        let report = operations.check_prime(number);
        operations.print_primality(&report, &format)?;
        return Ok(());
    }

    let Some(bound) = args.bound.as_deref() else {
        bail!("A bound or --check <N> is required");
    };

    let report = operations.generate_primes(bound)?;
    operations.print_primes(&report, &format)?;

    Ok(())
}
