use application::{OperationLog, RecordOperation, UploadedPhoto};
use chrono::NaiveDate;
use domain::operation::{
    MockOperationRepository, NewOperation, Operation, OperationFilter, OperationId, PlateFilter,
};
use domain::proof::{MockImageNormalizer, NormalizedImage};
use domain::vehicle::Plate;
use domain::DomainError;
use std::sync::Arc;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

fn request(sacks: i32, tons: f32) -> RecordOperation {
    RecordOperation {
        operation_date: date(5),
        plate: "abc-123".to_string(),
        driver: Some("Juan Pérez".to_string()),
        description: Some("Cemento".to_string()),
        sack_count: sacks,
        tonnage: tons,
        photo: None,
    }
}

fn stored(id: i32, sacks: Option<i32>, tons: Option<f32>) -> Operation {
    Operation {
        id: OperationId::new(id),
        recorded_at: None,
        operation_date: date(5),
        plate: "ABC-123".to_string(),
        driver: Some("Juan Pérez".to_string()),
        description: None,
        sack_count: sacks,
        tonnage: tons,
        proof_filename: None,
        has_proof_image: false,
    }
}

fn log(repo: MockOperationRepository, normalizer: MockImageNormalizer) -> OperationLog {
    OperationLog::new(Arc::new(repo), Arc::new(normalizer))
}

#[tokio::test]
async fn test_record_without_photo_inserts_validated_operation() {
    let mut repo = MockOperationRepository::new();
    repo.expect_insert()
        .withf(|op: &NewOperation| {
            op.plate.as_str() == "ABC-123"
                && op.sack_count == 200
                && op.tonnage == 10.5
                && op.proof_image.is_none()
        })
        .times(1)
        .returning(|_| Ok(OperationId::new(42)));

    let mut normalizer = MockImageNormalizer::new();
    normalizer.expect_normalize().never();

    let id = log(repo, normalizer).record(request(200, 10.5)).await.unwrap();
    assert_eq!(id.value(), 42);
}

#[tokio::test]
async fn test_record_zero_sacks_is_rejected_before_insert() {
    let mut repo = MockOperationRepository::new();
    repo.expect_insert().never();
    let mut normalizer = MockImageNormalizer::new();
    normalizer.expect_normalize().never();

    let err = log(repo, normalizer).record(request(0, 10.5)).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn test_record_non_positive_tonnage_is_rejected() {
    let mut repo = MockOperationRepository::new();
    repo.expect_insert().never();

    let err = log(repo, MockImageNormalizer::new())
        .record(request(10, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn test_record_stores_normalized_photo_bytes() {
    let mut normalizer = MockImageNormalizer::new();
    normalizer
        .expect_normalize()
        .withf(|raw: &[u8]| raw == &b"raw-photo"[..])
        .times(1)
        .returning(|_| {
            Ok(NormalizedImage {
                bytes: vec![0xFF, 0xD8, 0xFF],
                width: 1024,
                height: 768,
            })
        });

    let mut repo = MockOperationRepository::new();
    repo.expect_insert()
        .withf(|op: &NewOperation| {
            op.proof_image.as_deref() == Some(&[0xFF, 0xD8, 0xFF][..])
                && op.proof_filename.as_deref() == Some("remision.png")
        })
        .times(1)
        .returning(|_| Ok(OperationId::new(1)));

    let mut req = request(50, 2.5);
    req.photo = Some(UploadedPhoto {
        bytes: b"raw-photo".to_vec(),
        filename: Some("remision.png".to_string()),
    });

    log(repo, normalizer).record(req).await.unwrap();
}

#[tokio::test]
async fn test_record_undecodable_photo_persists_nothing() {
    let mut normalizer = MockImageNormalizer::new();
    normalizer
        .expect_normalize()
        .returning(|_| Err(DomainError::ImageDecode("not an image".into())));
    let mut repo = MockOperationRepository::new();
    repo.expect_insert().never();

    let mut req = request(50, 2.5);
    req.photo = Some(UploadedPhoto {
        bytes: b"garbage".to_vec(),
        filename: None,
    });

    let err = log(repo, normalizer).record(req).await.unwrap_err();
    assert!(matches!(err, DomainError::ImageDecode(_)));
}

#[tokio::test]
async fn test_history_returns_rows_with_totals() {
    let mut repo = MockOperationRepository::new();
    repo.expect_query()
        .withf(|f: &OperationFilter| {
            f.plate == PlateFilter::Exact(Plate::new("ABC-123").unwrap())
        })
        .returning(|_| {
            Ok(vec![
                stored(2, Some(200), Some(10.5)),
                stored(1, Some(100), Some(4.25)),
                stored(0, None, None),
            ])
        });

    let filter = OperationFilter::between(date(1), date(31))
        .with_plate(PlateFilter::parse("abc-123").unwrap());
    let history = log(repo, MockImageNormalizer::new())
        .history(&filter)
        .await
        .unwrap();

    assert_eq!(history.operations.len(), 3);
    assert_eq!(history.summary.total_sacks, 300);
    assert!((history.summary.total_tonnage - 14.75).abs() < 1e-6);
    assert_eq!(history.summary.trips, 3);
}

#[tokio::test]
async fn test_history_empty_result() {
    let mut repo = MockOperationRepository::new();
    repo.expect_query().returning(|_| Ok(Vec::new()));

    let history = log(repo, MockImageNormalizer::new())
        .history(&OperationFilter::default())
        .await
        .unwrap();

    assert!(history.is_empty());
    assert_eq!(history.summary.trips, 0);
}

#[tokio::test]
async fn test_proof_image_and_remove_delegate_to_store() {
    let mut repo = MockOperationRepository::new();
    repo.expect_fetch_image()
        .withf(|id: &OperationId| id.value() == 9)
        .returning(|_| Ok(None));
    repo.expect_delete()
        .withf(|id: &OperationId| id.value() == 9)
        .times(1)
        .returning(|_| Ok(()));

    let log = log(repo, MockImageNormalizer::new());
    assert_eq!(log.proof_image(OperationId::new(9)).await.unwrap(), None);
    log.remove(OperationId::new(9)).await.unwrap();
}
