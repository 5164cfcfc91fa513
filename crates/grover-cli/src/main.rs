//! Grover search command line.
//!
//! Builds a search circuit for a marked bit-string, samples it on the
//! statevector simulator, and prints the outcome histogram.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use console::style;
use tracing::info;
use tracing_subscriber::EnvFilter;

use grover_ir::CircuitBlock;
use grover_sim::{ExecutionResult, block_unitary, run};
use grover_synth::{GroverSearch, SearchObserver};

/// Grover search over a 2..5 qubit register
#[derive(Parser, Debug)]
#[command(name = "grover")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of qubits (search space size = 2^n)
    #[arg(short = 'n', long, default_value = "4")]
    qubits: usize,

    /// Marked bit-string to search for (MSB first, e.g. "0101")
    #[arg(short, long, default_value = "0101")]
    pattern: String,

    /// Number of shots to sample
    #[arg(short, long, default_value = "1024")]
    shots: u32,

    /// Number of Grover rounds (0 = planner optimum)
    #[arg(short, long, default_value = "0")]
    iterations: u32,

    /// Print each synthesised block's unitary matrix
    #[arg(long)]
    show_unitary: bool,

    /// Emit the result as JSON instead of the styled report
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
}

fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Observer that dumps each block's unitary as it is synthesised.
///
/// Every entry of these matrices is real, so only the real part is shown.
struct UnitaryPrinter {
    num_qubits: usize,
}

impl UnitaryPrinter {
    fn print_block(&self, block: &CircuitBlock) {
        print_section(&format!("Unitary of {block}"));
        let u = block_unitary(block, self.num_qubits);
        for row in 0..u.nrows() {
            let entries: Vec<String> = (0..u.ncols())
                .map(|col| format!("{:+.2}", u[(row, col)].re))
                .collect();
            println!("  [ {} ]", entries.join("  "));
        }
    }
}

impl SearchObserver for UnitaryPrinter {
    fn oracle_built(&mut self, block: &CircuitBlock) {
        self.print_block(block);
    }

    fn diffusion_built(&mut self, block: &CircuitBlock) {
        self.print_block(block);
    }
}

/// Render the sampled counts as a bar chart, marked outcome highlighted.
fn print_histogram(result: &ExecutionResult, marked: &str) {
    let entries = result.counts.sorted();
    let top = entries.first().map_or(1, |&(_, n)| n.max(1));

    for (outcome, count) in entries {
        let frequency = result.frequency(outcome);
        let bar_len = (count * 30 / top) as usize;
        let bar = "█".repeat(bar_len.max(1));
        let ket = format!("|{outcome}⟩");
        if outcome == marked {
            println!(
                "  {} {:>6}  {:>6.1}%  {}",
                style(ket).green().bold(),
                count,
                frequency * 100.0,
                style(bar).green()
            );
        } else {
            println!(
                "  {ket} {count:>6}  {:>6.1}%  {}",
                frequency * 100.0,
                style(bar).dim()
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let mut search = GroverSearch::new(cli.qubits, &cli.pattern)?;
    if cli.iterations > 0 {
        search = search.with_iterations(cli.iterations);
    }
    let rounds = search.iterations();

    if cli.json {
        let circuit = search.build()?;
        let result = run(&circuit, cli.shots)?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_header("Grover's Search");

    print_section("Problem Setup");
    print_result("Qubits", cli.qubits);
    print_result("Search space size", 1u64 << cli.qubits);
    print_result(
        "Marked state",
        format!("|{}⟩ = |{}⟩", search.pattern().basis_index(), cli.pattern),
    );
    print_result("Grover rounds", rounds);

    let circuit = if cli.show_unitary {
        let mut printer = UnitaryPrinter {
            num_qubits: cli.qubits,
        };
        search.build_observed(&mut printer)?
    } else {
        search.build()?
    };
    info!(
        gates = circuit.gate_count(),
        rounds,
        "search circuit composed"
    );

    print_section("Circuit");
    print_result("Gates", circuit.gate_count());
    print_result("Qubits", circuit.num_qubits());
    print_result("Classical bits", circuit.num_clbits());

    let theta = (1.0 / f64::from(1u32 << cli.qubits).sqrt()).asin();
    let success = (f64::from(2 * rounds + 1) * theta).sin().powi(2);
    print_result("Predicted success", format!("{:.1}%", success * 100.0));

    let result = run(&circuit, cli.shots)?;
    info!(
        outcomes = result.counts.len(),
        elapsed_ms = result.execution_time_ms,
        "sampling finished"
    );

    print_section(&format!("Sampled Outcomes ({} shots)", result.shots));
    print_histogram(&result, &cli.pattern);
    print_result(
        "Execution time",
        format!("{} ms", result.execution_time_ms),
    );

    println!();
    let observed = result.frequency(&cli.pattern);
    if result
        .counts
        .most_frequent()
        .is_some_and(|(outcome, _)| outcome == cli.pattern)
    {
        print_success(&format!(
            "Marked state |{}⟩ found in {:.1}% of shots",
            cli.pattern,
            observed * 100.0
        ));
    } else {
        println!(
            "{} marked state |{}⟩ was not the modal outcome ({:.1}% of shots)",
            style("✗").red().bold(),
            cli.pattern,
            observed * 100.0
        );
    }

    Ok(())
}
