use std::process::ExitCode;

use huf_converter::action::cli::process_args;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match process_args(args) {
        Ok(output) if output.executed => {
            match &output.output_path {
                Some(path) => log::info!("Conversion completed, output file: {}", path.display()),
                None => log::info!("Conversion completed ({})", output.operation),
            }
            println!("Conversion completed successfully.");
            ExitCode::SUCCESS
        }
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            if e.is_validation() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
