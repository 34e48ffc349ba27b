//! Job model against a live database (requires `DATABASE_URL`).

mod common;

use jobly::sql::NO_TITLE_FILTER;
use jobly::{Job, JobFilter, JobSearchQuery, JobUpdate, JoblyError, JoblyResult, NewJob};
use rust_decimal::Decimal;

fn titles(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|j| j.title.as_str()).collect()
}

#[tokio::test]
async fn find_all_filters() -> JoblyResult<()> {
    let Some(mut client) = common::try_connect("find_all_filters").await? else {
        return Ok(());
    };
    let tx = client.transaction().await.map_err(JoblyError::from_db_error)?;
    common::seed(&tx).await?;

    let all = Job::find_all(&tx, &JobFilter::new().title(NO_TITLE_FILTER)).await?;
    assert_eq!(titles(&all), ["Alchemist", "Baker", "Chemist"]);
    assert_eq!(all[1].equity, Some(Decimal::new(5, 1)));

    let ist = Job::find_all(&tx, &JobFilter::new().title("%ist%")).await?;
    assert_eq!(titles(&ist), ["Alchemist", "Chemist"]);

    let rich = Job::find_all(&tx, &JobFilter::new().min_salary(101)).await?;
    assert_eq!(titles(&rich), ["Chemist"]);

    let equity = Job::find_all(&tx, &JobFilter::new().has_equity("true")).await?;
    assert_eq!(titles(&equity), ["Baker"]);

    let no_equity = Job::find_all(&tx, &JobFilter::new().has_equity("false")).await?;
    assert_eq!(titles(&no_equity), ["Alchemist", "Chemist"]);

    let combined = Job::find_all(
        &tx,
        &JobFilter::new().title("%ist%").min_salary(11).has_equity("false"),
    )
    .await?;
    assert_eq!(titles(&combined), ["Chemist"]);

    let from_query = JobFilter::from(JobSearchQuery {
        title: Some("BAK".into()),
        ..Default::default()
    });
    assert_eq!(titles(&Job::find_all(&tx, &from_query).await?), ["Baker"]);

    // A zero minimum does not filter.
    let zero = Job::find_all(&tx, &JobFilter::new().min_salary(0)).await?;
    assert_eq!(zero.len(), 3);
    Ok(())
}

#[tokio::test]
async fn create_get_update_remove() -> JoblyResult<()> {
    let Some(mut client) = common::try_connect("create_get_update_remove").await? else {
        return Ok(());
    };
    let tx = client.transaction().await.map_err(JoblyError::from_db_error)?;
    common::seed(&tx).await?;

    let new_job = NewJob {
        title: "Distiller".into(),
        salary: Some(500),
        equity: Some(Decimal::new(1, 1)),
        company_handle: "c1".into(),
    };
    let job = Job::create(&tx, &new_job).await?;
    assert_eq!(job.title, "Distiller");
    assert_eq!(Job::get(&tx, job.id).await?, job);

    let dup = Job::create(&tx, &new_job).await.unwrap_err();
    assert!(dup.is_bad_request());

    let updated = Job::update(
        &tx,
        job.id,
        JobUpdate {
            salary: Some(Some(600)),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(updated.salary, Some(600));
    assert_eq!(updated.title, "Distiller");
    assert_eq!(updated.equity, Some(Decimal::new(1, 1)));

    let empty = Job::update(&tx, job.id, JobUpdate::default()).await.unwrap_err();
    assert!(empty.is_bad_request());

    let missing = Job::update(
        &tx,
        999_999,
        JobUpdate {
            title: Some("x".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(missing.is_not_found());

    Job::remove(&tx, job.id).await?;
    assert!(Job::get(&tx, job.id).await.unwrap_err().is_not_found());
    assert!(Job::remove(&tx, job.id).await.unwrap_err().is_not_found());
    Ok(())
}

#[tokio::test]
async fn create_for_unknown_company_is_client_error() -> JoblyResult<()> {
    let Some(mut client) = common::try_connect("create_for_unknown_company_is_client_error").await?
    else {
        return Ok(());
    };
    let tx = client.transaction().await.map_err(JoblyError::from_db_error)?;
    common::seed(&tx).await?;

    let err = Job::create(
        &tx,
        &NewJob {
            title: "Ghost".into(),
            salary: None,
            equity: None,
            company_handle: "nope".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, JoblyError::ForeignKeyViolation(_)));
    assert_eq!(err.status_code(), 400);
    Ok(())
}

#[tokio::test]
async fn update_null_fields() -> JoblyResult<()> {
    let Some(mut client) = common::try_connect("update_null_fields").await? else {
        return Ok(());
    };
    let tx = client.transaction().await.map_err(JoblyError::from_db_error)?;
    common::seed(&tx).await?;

    let update: JobUpdate =
        serde_json::from_str(r#"{"title":"Cobbler","salary":null,"equity":null}"#)
            .map_err(|e| JoblyError::Other(e.to_string()))?;
    let job = Job::update(&tx, 3, update).await?;
    assert_eq!(
        job,
        Job {
            id: 3,
            title: "Cobbler".into(),
            salary: None,
            equity: None,
            company_handle: "c3".into(),
        }
    );
    assert_eq!(Job::get(&tx, 3).await?, job);

    // A lone null is still an update.
    let job = Job::update(
        &tx,
        2,
        JobUpdate {
            equity: Some(None),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(job.equity, None);
    assert_eq!(job.salary, Some(100));
    Ok(())
}
