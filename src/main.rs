use clap::Parser;
use lcoe_calculator::{app, cli::Args, logging};

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let args = Args::parse();
    logging::init_logging(args.verbose);
    if let Err(err) = app::run(args) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
