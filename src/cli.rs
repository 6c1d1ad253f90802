use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "stackarena", about = "Sort integers using a fixed-capacity arena for scratch space")]
pub struct Args {
    /// Arena capacity in elements (suffixes k, m, g); defaults to what the input needs
    #[arg(short = 'c', long, value_name = "SIZE")]
    pub capacity: Option<String>,

    /// Keep equal values in input order
    #[arg(short = 's', long)]
    pub stable: bool,

    /// Print whether VALUE occurs in the input instead of sorting
    #[arg(long, value_name = "VALUE", allow_negative_numbers = true)]
    pub contains: Option<i64>,

    /// Write result to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Report arena usage on stderr
    #[arg(long)]
    pub debug: bool,

    /// Input files
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}
