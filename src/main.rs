use clap::Parser;

mod commands;
mod output;

use commands::sort::{self, SortArgs, SortOutput};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw,
}

#[derive(Parser)]
#[command(name = "mdlist")]
#[command(version = VERSION)]
#[command(about = "Sort and re-wrap bulleted markdown lists for changelog preparation")]
struct Cli {
    #[command(flatten)]
    sort: SortArgs,

    /// Emit a JSON envelope instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let mode = if cli.json {
        ResponseMode::Json
    } else {
        ResponseMode::Raw
    };

    let result = sort::run(cli.sort);

    match mode {
        ResponseMode::Json => {
            let (json_result, exit_code) = output::map_cmd_result_to_json(result);
            let _ = output::print_json_result(json_result);
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
        ResponseMode::Raw => match result {
            Ok((SortOutput::Normalize(out), exit_code)) => {
                if output::print_raw(&out.text).is_err() {
                    return std::process::ExitCode::from(1);
                }
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
            // Rewrite mode reports per-file progress on stderr as it goes
            Ok((SortOutput::Rewrite(_), exit_code)) => {
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
            Err(err) => {
                report_raw_error(&err);
                let exit_code = output::exit_code_for_error(err.code);
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
        },
    }
}

fn report_raw_error(err: &mdlist::Error) {
    let problem = err
        .details
        .get("problem")
        .or_else(|| err.details.get("error"))
        .and_then(|v| v.as_str());

    match problem {
        Some(p) => eprintln!("mdlist: {}: {}", err.message, p),
        None => eprintln!("mdlist: {}", err.message),
    }
    for hint in &err.hints {
        eprintln!("  hint: {}", hint.message);
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
