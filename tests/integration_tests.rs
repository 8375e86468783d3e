use httpmock::prelude::*;
use wordrank::{CliConfig, LocalStorage, RankEngine, RankPipeline};
use tempfile::TempDir;

fn test_config(output_path: String) -> CliConfig {
    CliConfig {
        text: None,
        source: "./input.txt".to_string(),
        top_n: 10,
        output_path,
        formats: vec![],
        verbose: false,
        monitor: false,
    }
}

#[tokio::test]
async fn test_end_to_end_with_http_source() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let source_mock = server.mock(|when, then| {
        when.method(GET).path("/corpus.txt");
        then.status(200)
            .header("Content-Type", "text/plain")
            .body("the cat and the dog and the bird");
    });

    let mut config = test_config(output_path.clone());
    config.source = server.url("/corpus.txt");
    config.top_n = 3;

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = RankPipeline::new(storage, config);
    let engine = RankEngine::new_with_monitoring(pipeline, false);

    let result = engine.run().await;

    assert!(result.is_ok());
    source_mock.assert();

    let output_file_path = result.unwrap();
    assert!(output_file_path.contains("wordrank_output.zip"));

    let full_path = std::path::Path::new(&output_path).join("wordrank_output.zip");
    assert!(full_path.exists());

    // 驗證 ZIP 內容
    let zip_data = std::fs::read(&full_path).unwrap();
    let cursor = std::io::Cursor::new(zip_data);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();

    assert_eq!(archive.len(), 3);

    let mut csv_file = archive.by_name("ranking.csv").unwrap();
    let mut csv_content = String::new();
    std::io::Read::read_to_string(&mut csv_file, &mut csv_content).unwrap();

    let csv_lines: Vec<&str> = csv_content.lines().collect();
    assert_eq!(csv_lines[0], "token,count");
    assert_eq!(csv_lines[1], "the,3");
    assert_eq!(csv_lines[2], "and,2");
    // "bird"、"cat"、"dog" 同為 1 次，字典序取最小者
    assert_eq!(csv_lines[3], "bird,1");
    assert_eq!(csv_lines.len(), 4);
}

#[tokio::test]
async fn test_end_to_end_with_file_source() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let source_path = temp_dir.path().join("corpus.txt");
    std::fs::write(&source_path, "alpha beta alpha").unwrap();

    let mut config = test_config(output_path.clone());
    config.source = source_path.to_str().unwrap().to_string();
    config.top_n = 5;

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = RankPipeline::new(storage, config);
    let engine = RankEngine::new(pipeline);

    let result = engine.run().await;
    assert!(result.is_ok());

    let full_path = std::path::Path::new(&output_path).join("wordrank_output.zip");
    let zip_data = std::fs::read(full_path).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();

    let summary: wordrank::RankSummary = {
        let summary_file = archive.by_name("summary.json").unwrap();
        serde_json::from_reader(summary_file).unwrap()
    };

    assert_eq!(summary.total_tokens, 3);
    assert_eq!(summary.distinct_tokens, 2);
    assert_eq!(summary.ranking[0].token, "alpha");
    assert_eq!(summary.ranking[0].count, 2);
}

#[tokio::test]
async fn test_end_to_end_with_inline_text() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = test_config(output_path.clone());
    config.text = Some("x y x z x y".to_string());
    config.top_n = 2;
    config.formats = vec!["csv".to_string()];

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = RankPipeline::new(storage, config);
    let engine = RankEngine::new(pipeline);

    engine.run().await.unwrap();

    let full_path = std::path::Path::new(&output_path).join("wordrank_output.zip");
    let zip_data = std::fs::read(full_path).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();

    // 只要求 CSV 格式
    assert_eq!(archive.len(), 1);

    let mut csv_file = archive.by_name("ranking.csv").unwrap();
    let mut csv_content = String::new();
    std::io::Read::read_to_string(&mut csv_file, &mut csv_content).unwrap();

    assert!(csv_content.contains("x,3"));
    assert!(csv_content.contains("y,2"));
    assert!(!csv_content.contains("z,1"));
}

#[tokio::test]
async fn test_end_to_end_http_failure_propagates() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let source_mock = server.mock(|when, then| {
        when.method(GET).path("/broken");
        then.status(500);
    });

    let mut config = test_config(output_path.clone());
    config.source = server.url("/broken");

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = RankPipeline::new(storage, config);
    let engine = RankEngine::new(pipeline);

    let result = engine.run().await;

    assert!(result.is_err());
    source_mock.assert();

    // 失敗時不應留下輸出檔
    let full_path = std::path::Path::new(&output_path).join("wordrank_output.zip");
    assert!(!full_path.exists());
}

#[tokio::test]
async fn test_end_to_end_with_monitoring() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = test_config(output_path.clone());
    config.text = Some("m n m".to_string());
    config.monitor = true;

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = RankPipeline::new(storage, config);
    let engine = RankEngine::new_with_monitoring(pipeline, true);

    let result = engine.run().await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_end_to_end_empty_source_produces_empty_ranking() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let source_path = temp_dir.path().join("empty.txt");
    std::fs::write(&source_path, "").unwrap();

    let mut config = test_config(output_path.clone());
    config.source = source_path.to_str().unwrap().to_string();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = RankPipeline::new(storage, config);
    let engine = RankEngine::new(pipeline);

    engine.run().await.unwrap();

    let full_path = std::path::Path::new(&output_path).join("wordrank_output.zip");
    let zip_data = std::fs::read(full_path).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();

    let summary: wordrank::RankSummary = {
        let summary_file = archive.by_name("summary.json").unwrap();
        serde_json::from_reader(summary_file).unwrap()
    };

    assert_eq!(summary.total_tokens, 0);
    assert_eq!(summary.distinct_tokens, 0);
    assert!(summary.ranking.is_empty());
}
