use campus_core::{AssistantConfig, KnowledgeBase, Topic};
use strum::IntoEnumIterator;
use tempfile::TempDir;

fn write_knowledge(dir: &TempDir, name: &str, topics: &[Topic]) -> std::path::PathBuf {
    let mut content = String::new();
    for topic in topics {
        content.push_str(&format!(
            "[[entry]]\ntopic = \"{topic}\"\nbody = \"custom {topic}\"\n\n"
        ));
    }
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_config_points_at_custom_knowledge() {
    let temp_dir = TempDir::new().unwrap();
    let all: Vec<Topic> = Topic::iter().collect();
    write_knowledge(&temp_dir, "answers.toml", &all);

    let config_path = temp_dir.path().join("campus.toml");
    std::fs::write(
        &config_path,
        "reply_latency_ms = 10\nknowledge_file = \"answers.toml\"\n",
    )
    .unwrap();

    let config = AssistantConfig::load(&config_path).unwrap();
    let kb = config.knowledge_base().unwrap();
    assert_eq!(kb.lookup(Topic::Placement).body, "custom placement");
    assert_eq!(config.reply_latency().as_millis(), 10);
}

#[test]
fn test_incomplete_knowledge_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_knowledge(&temp_dir, "partial.toml", &[Topic::Exam, Topic::Default]);

    let err = KnowledgeBase::load(&path).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("timetable"));
}

#[test]
fn test_missing_knowledge_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let err = KnowledgeBase::load(&temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(err.is_config());
}
