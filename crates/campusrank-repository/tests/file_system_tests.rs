//! Integration tests for FileSystemRepository

use campusrank_core::RankingType;
use campusrank_repository::{
    FileSystemRepository, RankingTypeRegistry, RankingTypeRepository, RepositoryError,
    WritableRankingTypeRepository,
};
use tempfile::TempDir;
use tokio::fs;

async fn create_test_repo() -> (TempDir, FileSystemRepository) {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("ranking_types.yaml");

    let content = r#"ranking_types:
  - name: Overall
    criteria:
      - Admission Rate
      - Retention Rate
      - Graduation Rate
      - Median Earnings
  - name: Return on Investment
    criteria:
      - Median Earnings
      - Median Debt
"#;
    fs::write(&file, content).await.unwrap();

    let repo = FileSystemRepository::new(&file).unwrap();
    (temp_dir, repo)
}

#[tokio::test]
async fn test_load_ranking_types() {
    let (_temp, repo) = create_test_repo().await;

    let types = repo.load_ranking_types().await.expect("Failed to load");
    assert_eq!(types.len(), 2);
    assert_eq!(types[1].name, "Return on Investment");
    assert_eq!(types[1].criteria, vec!["Median Earnings", "Median Debt"]);
}

#[tokio::test]
async fn test_load_ranking_type_by_name() {
    let (_temp, repo) = create_test_repo().await;

    let rt = repo.load_ranking_type("Overall").await.unwrap();
    assert_eq!(rt.criteria.len(), 4);

    let err = repo.load_ranking_type("Nope").await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_missing_file_reads_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let repo = FileSystemRepository::new(temp_dir.path().join("absent.yaml")).unwrap();

    let types = repo.load_ranking_types().await.unwrap();
    assert_eq!(types, RankingType::defaults());
}

#[tokio::test]
async fn test_missing_parent_directory_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let result = FileSystemRepository::new(temp_dir.path().join("no/such/dir/types.yaml"));
    assert!(matches!(result, Err(RepositoryError::InvalidPath { .. })));
}

#[tokio::test]
async fn test_save_then_reload() -> anyhow::Result<()> {
    let (_temp, repo) = create_test_repo().await;

    let updated = vec![
        RankingType::from_comma_separated("Selectivity", "Admission Rate, Enrollment")?,
        RankingType::from_comma_separated("Outcomes", "Graduation Rate,Median Earnings")?,
    ];
    repo.save_ranking_types(&updated).await?;

    let registry = RankingTypeRegistry::load(&repo).await?;
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Selectivity", "Outcomes"]);
    assert!(!registry.contains("Overall"));
    assert_eq!(
        registry.get("Selectivity").unwrap().criteria,
        vec!["Admission Rate", "Enrollment"]
    );
    Ok(())
}

#[tokio::test]
async fn test_save_rejects_invalid_without_writing() {
    let (_temp, repo) = create_test_repo().await;
    let invalid = RankingType {
        name: "Empty".to_string(),
        criteria: vec![],
    };

    let err = repo.save_ranking_types(&[invalid]).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Invalid(_)));

    let types = repo.load_ranking_types().await.unwrap();
    assert_eq!(types.len(), 2);
}

#[tokio::test]
async fn test_malformed_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("ranking_types.yaml");
    fs::write(&file, "ranking_types: [this is: not valid").await.unwrap();

    let repo = FileSystemRepository::new(&file).unwrap();
    let err = repo.load_ranking_types().await.unwrap_err();
    assert!(matches!(err, RepositoryError::YamlParse(_)));
}

#[tokio::test]
async fn test_stored_invalid_entry_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("ranking_types.yaml");
    fs::write(&file, "ranking_types:\n  - name: Hollow\n    criteria: []\n")
        .await
        .unwrap();

    let repo = FileSystemRepository::new(&file).unwrap();
    let err = repo.load_ranking_types().await.unwrap_err();
    assert!(matches!(err, RepositoryError::Invalid(_)));
}
