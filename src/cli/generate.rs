use {
    crate::cli::{GenerateArgs, Hdrview},
    clap::CommandFactory,
    std::io::stdout,
};

pub fn main(args: GenerateArgs) {
    let stdout = stdout();
    let mut stdout = stdout.lock();
    clap_complete::generate(args.shell, &mut Hdrview::command(), "hdrview", &mut stdout);
}
