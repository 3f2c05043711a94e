// region:    --- Imports
use crate::auction::model::AuctionRecord;
use crate::error::{GeneratorError, GeneratorResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::info;

// endregion: --- Imports

/// NDJSON 출력 파일명
pub const NDJSON_FILE_NAME: &str = "ebay_auctions_large.ndjson";

/// JSON 배열 출력 파일명
pub const JSON_FILE_NAME: &str = "ebay_auctions_large.json";

// region:    --- Rendering
/// 레코드당 한 줄의 JSON 객체
pub fn render_ndjson(records: &[AuctionRecord]) -> GeneratorResult<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

/// 2칸 들여쓰기의 JSON 배열
pub fn render_json_array(records: &[AuctionRecord]) -> GeneratorResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
// endregion: --- Rendering

// region:    --- Record Sink Trait
/// 레코드 출력 트레이트
#[async_trait]
pub trait RecordSink {
    async fn write_records(&self, records: &[AuctionRecord]) -> GeneratorResult<()>;
}

/// 파일 출력 구현체
pub struct FileSink {
    output_dir: PathBuf,
}

impl FileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn ndjson_path(&self) -> PathBuf {
        self.output_dir.join(NDJSON_FILE_NAME)
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(JSON_FILE_NAME)
    }

    async fn write_file(path: &Path, contents: String) -> GeneratorResult<()> {
        tokio::fs::write(path, contents)
            .await
            .map_err(|e| GeneratorError::io(path, e))
    }
}

/// 파일 출력 구현체 메서드 구현
#[async_trait]
impl RecordSink for FileSink {
    async fn write_records(&self, records: &[AuctionRecord]) -> GeneratorResult<()> {
        // 출력 디렉터리가 없으면 생성
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| GeneratorError::io(&self.output_dir, e))?;

        let ndjson_path = self.ndjson_path();
        Self::write_file(&ndjson_path, render_ndjson(records)?).await?;
        info!("{:<12} --> NDJSON 저장: {}", "Sink", ndjson_path.display());

        let json_path = self.json_path();
        Self::write_file(&json_path, render_json_array(records)?).await?;
        info!("{:<12} --> JSON 배열 저장: {}", "Sink", json_path.display());

        Ok(())
    }
}

/// 메모리 출력 구현체 (NDJSON, JSON 배열)
#[derive(Default)]
pub struct MemorySink {
    rendered: Mutex<Option<(String, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 마지막으로 기록된 (NDJSON, JSON 배열)
    pub async fn rendered(&self) -> Option<(String, String)> {
        self.rendered.lock().await.clone()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn write_records(&self, records: &[AuctionRecord]) -> GeneratorResult<()> {
        let rendered = (render_ndjson(records)?, render_json_array(records)?);
        *self.rendered.lock().await = Some(rendered);
        Ok(())
    }
}
// endregion: --- Record Sink Trait
