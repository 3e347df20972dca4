use tracing::Level;
use tracing_subscriber::EnvFilter;

/// 바이너리용 tracing 구독자를 설치한다. `RUST_LOG`가 있으면 그 설정을 따른다.
///
/// `verbose`이면 연도별 할인 현금흐름(debug)까지 출력한다.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::INFO };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // 이미 설치된 구독자가 있으면(테스트 등) 그대로 둔다.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
