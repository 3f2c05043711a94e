// region:    --- Imports
use auction_dataset::config::Config;
use auction_dataset::output::FileSink;
use chrono::Local;
use clap::Parser;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let config = Config::parse();
    info!(
        "{:<12} --> 설정: 경매 {}건, 출력 디렉터리 {}",
        "Main",
        config.auction_count(),
        config.output_dir.display()
    );

    let mut rng = config.rng();
    let sink = FileSink::new(&config.output_dir);

    // 생성 및 저장
    match auction_dataset::run(&config, Local::now().naive_local(), &mut rng, &sink).await {
        Ok(auctions) => {
            info!("{:<12} --> 경매 {}건 저장 완료", "Main", auctions.len());
            Ok(())
        }
        Err(e) => {
            error!("{:<12} --> 데이터셋 생성 실패: {}", "Main", e);
            Err(e.into())
        }
    }
}
// endregion: --- Main
