use {
    crate::{
        cli::{GlobalArgs, ProbeArgs},
        formats,
        logger::Logger,
        utils::errorfmt::ErrorFmt,
    },
    std::path::Path,
};

pub fn main(global: GlobalArgs, args: ProbeArgs) {
    Logger::install_stderr(global.log_level.into());
    let mut failed = false;
    for file in &args.files {
        match formats::classify(Path::new(file)) {
            Ok(info) => println!("{}: {} hdr={}", file, info.format.name(), info.hdr),
            Err(e) => {
                log::error!("Could not classify {}: {}", file, ErrorFmt(e));
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}
