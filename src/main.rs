mod signals;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use signals::{
    Direction, IntersectionConfig, IntersectionController, Lane, LaneKey, LaneSnapshot, LaneType,
    SignalTiming,
};

#[derive(Parser)]
#[command(name = "signal_sim")]
#[command(about = "Intersection signal timing simulation")]
struct Cli {
    /// Number of simulated seconds to run
    #[arg(long, default_value = "300")]
    ticks: u64,

    /// All-red safety interval between phase changes, in seconds
    #[arg(long, default_value = "4")]
    all_red: u32,

    /// GREEN duration for through lanes, in seconds
    #[arg(long, default_value = "10")]
    through_green: u32,

    /// YELLOW duration for through lanes, in seconds
    #[arg(long, default_value = "3")]
    through_yellow: u32,

    /// GREEN duration for left-turn lanes, in seconds
    #[arg(long, default_value = "6")]
    left_green: u32,

    /// YELLOW duration for left-turn lanes, in seconds
    #[arg(long, default_value = "3")]
    left_yellow: u32,

    /// Lane to register, as DIR:TYPE (e.g. NS:through, EW:left-turn).
    /// Repeatable; defaults to all four lanes when omitted.
    #[arg(long = "lane")]
    lanes: Vec<String>,

    /// Collect timings and lanes from console prompts instead of flags
    #[arg(long)]
    interactive: bool,

    /// Real-time delay between ticks in milliseconds (0 to run flat out)
    #[arg(long, default_value = "100")]
    delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = if cli.interactive {
        collect_config_interactively(cli.all_red)?
    } else {
        build_config(&cli)?
    };

    info!(
        "configured {} lane(s), all-red interval {}s",
        config.lanes.len(),
        config.all_red_secs
    );

    let mut controller = IntersectionController::from_config(&config)?;
    run_simulation(&mut controller, cli.ticks, cli.delay_ms);
    Ok(())
}

/// Build the intersection configuration from command-line flags.
fn build_config(cli: &Cli) -> Result<IntersectionConfig> {
    let through = SignalTiming::new(cli.through_green, cli.through_yellow);
    let left = SignalTiming::new(cli.left_green, cli.left_yellow);

    let keys: Vec<LaneKey> = if cli.lanes.is_empty() {
        vec![
            LaneKey::new(Direction::NS, LaneType::Through),
            LaneKey::new(Direction::NS, LaneType::LeftTurn),
            LaneKey::new(Direction::EW, LaneType::Through),
            LaneKey::new(Direction::EW, LaneType::LeftTurn),
        ]
    } else {
        cli.lanes
            .iter()
            .map(|spec| spec.parse().with_context(|| format!("--lane {}", spec)))
            .collect::<Result<_>>()?
    };

    let mut config = IntersectionConfig::new(cli.all_red);
    for key in keys {
        let timing = match key.lane_type {
            LaneType::Through => through,
            LaneType::LeftTurn => left,
        };
        config = config.with_lane(Lane::new(key.direction, key.lane_type), timing);
    }
    Ok(config)
}

/// Collect timings and lanes through console prompts.
fn collect_config_interactively(all_red_secs: u32) -> Result<IntersectionConfig> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let through = SignalTiming::new(
        prompt_secs(
            &mut lines,
            "How many seconds does the GREEN signal for through lane last: ",
        )?,
        prompt_secs(
            &mut lines,
            "How many seconds does the YELLOW signal for through lane last: ",
        )?,
    );
    let left = SignalTiming::new(
        prompt_secs(
            &mut lines,
            "How many seconds does the GREEN signal for left-turn lane last: ",
        )?,
        prompt_secs(
            &mut lines,
            "How many seconds does the YELLOW signal for left-turn lane last: ",
        )?,
    );

    let mut config = IntersectionConfig::new(all_red_secs);
    loop {
        let flag = prompt_line(
            &mut lines,
            "Add a lane to the traffic system: 'n' for no, 'y' for yes: ",
        )?;
        match flag.as_str() {
            "n" => break,
            "y" => {
                let direction = prompt_line(
                    &mut lines,
                    "Which direction: 'NS' for North-South, 'EW' for East-West: ",
                )?;
                let lane_type = prompt_line(
                    &mut lines,
                    "Which lane type: 'through' for through lanes, 'left-turn' for left-turn lanes: ",
                )?;
                let key: LaneKey = match format!("{}:{}", direction, lane_type).parse() {
                    Ok(key) => key,
                    Err(err) => {
                        println!("{}. Please try again.", err);
                        continue;
                    }
                };
                let timing = match key.lane_type {
                    LaneType::Through => through,
                    LaneType::LeftTurn => left,
                };
                config = config.with_lane(Lane::new(key.direction, key.lane_type), timing);
                println!("----------Lane added successfully----------\n");
            }
            _ => println!("Invalid input. Please try again."),
        }
    }
    Ok(config)
}

fn prompt_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("failed to flush prompt")?;
    let line = lines
        .next()
        .context("unexpected end of input")?
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}

fn prompt_secs(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<u32> {
    loop {
        let line = prompt_line(lines, prompt)?;
        match line.parse() {
            Ok(secs) => return Ok(secs),
            Err(_) => println!("Invalid input. Please enter a non-negative number of seconds."),
        }
    }
}

/// Drive the controller once per simulated second, rendering each state.
fn run_simulation(controller: &mut IntersectionController, ticks: u64, delay_ms: u64) {
    for _ in 0..ticks {
        controller.step();
        println!(
            "{}",
            render_status(controller.elapsed_secs(), &controller.snapshot())
        );
        controller.advance_elapsed_clock();
        if delay_ms > 0 {
            std::thread::sleep(std::time::Duration::from_millis(delay_ms));
        }
    }
}

/// Format one status line, e.g.
/// `[00:07]: NS through lanes: GREEN (3s), EW Left-turn: RED (0s)`
fn render_status(elapsed_secs: u64, snapshots: &[LaneSnapshot]) -> String {
    let mut line = format!("[{:02}:{:02}]:", elapsed_secs / 60, elapsed_secs % 60);
    for (i, lane) in snapshots.iter().enumerate() {
        let label = match lane.key.lane_type {
            LaneType::Through => "through lanes",
            LaneType::LeftTurn => "Left-turn",
        };
        let sep = if i == 0 { "" } else { "," };
        line.push_str(&format!(
            "{} {} {}: {} ({}s)",
            sep, lane.key.direction, label, lane.color, lane.remaining_secs
        ));
    }
    line
}
