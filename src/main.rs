use clap::Parser;
use console::style;

#[derive(Parser)]
#[command(name = "boilersmith")]
#[command(version)]
#[command(
    about = "Add a new boilerplate to the Boilertowns registry",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    println!("{}\n", style("🎉 Welcome & thank you for contributing to Boilertowns!").bold());

    match boilersmith::run() {
        Ok(outcome) => {
            println!("\n👍 Awesome!, {} was added.\n", style(&outcome.name).green());
        }
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    }
}
