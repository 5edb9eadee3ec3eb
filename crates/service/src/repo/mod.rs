//! SeaORM-backed [`OrderedRepository`](crate::content::OrderedRepository)
//! implementations, one per content table.

pub mod slider;
pub mod branch;
pub mod service_item;
pub mod news;

pub use branch::SeaOrmBranchRepository;
pub use news::SeaOrmNewsRepository;
pub use service_item::SeaOrmServiceRepository;
pub use slider::SeaOrmSliderRepository;

use sea_orm::DbErr;

use crate::errors::ServiceError;

pub(crate) fn db_err(e: DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use models::branch::BranchDraft;
    use models::news::NewsDraft;
    use models::service_item::ServiceDraft;
    use models::slider::SliderDraft;

    use super::*;
    use crate::content::OrderedRepository;
    use crate::errors::ServiceError;

    fn service_draft(title: &str) -> ServiceDraft {
        ServiceDraft {
            title: title.into(),
            description: String::new(),
            title_si: format!("{title} si"),
            description_si: String::new(),
        }
    }

    fn news_draft(title: &str, day: u32) -> NewsDraft {
        NewsDraft {
            title: title.into(),
            title_si: format!("{title} si"),
            description: String::new(),
            description_si: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn slider_rows_list_by_order_index() -> Result<(), anyhow::Error> {
        let db = models::db::connect_ephemeral().await?;
        let repo = SeaOrmSliderRepository { db };
        assert_eq!(repo.max_order_index().await?, None);

        let a = repo.insert(SliderDraft { image_url: "https://cdn/a.png".into() }, 1).await?;
        let b = repo.insert(SliderDraft { image_url: "https://cdn/b.png".into() }, 0).await?;
        assert_eq!(repo.max_order_index().await?, Some(1));

        let ids: Vec<i32> = repo.list().await?.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);

        repo.set_order_index(a.id, 5).await?;
        assert_eq!(repo.get(a.id).await?.unwrap().order_index, 5);
        assert!(matches!(repo.set_order_index(999, 0).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn branch_update_and_delete() -> Result<(), anyhow::Error> {
        let db = models::db::connect_ephemeral().await?;
        let repo = SeaOrmBranchRepository { db };
        let draft = BranchDraft {
            title: "Kandy".into(),
            description: String::new(),
            title_si: "මහනුවර".into(),
            description_si: String::new(),
            address: Some("  ".into()),
            address_si: None,
            contact_number: Some("081 222 3344".into()),
            map_url: None,
            is_coming_soon: false,
        };
        let created = repo.insert(draft.clone(), 0).await?;
        assert_eq!(created.address, None);

        let updated = repo.update(created.id, BranchDraft { is_coming_soon: true, ..draft.clone() }).await?;
        assert!(updated.is_coming_soon);
        assert!(matches!(repo.update(999, draft).await, Err(ServiceError::NotFound(_))));

        assert!(repo.delete(created.id).await?);
        assert!(!repo.delete(created.id).await?);
        assert!(repo.get(created.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn service_rows_tie_break_on_id() -> Result<(), anyhow::Error> {
        let db = models::db::connect_ephemeral().await?;
        let repo = SeaOrmServiceRepository { db };
        let first = repo.insert(service_draft("Gold loans"), 0).await?;
        let second = repo.insert(service_draft("Valuation"), 0).await?;
        let ids: Vec<i32> = repo.list().await?.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        Ok(())
    }

    #[tokio::test]
    async fn news_without_index_sorts_last_by_date() -> Result<(), anyhow::Error> {
        let db = models::db::connect_ephemeral().await?;
        let repo = SeaOrmNewsRepository { db };
        let indexed = repo.insert(news_draft("Opening", 1), 0).await?;
        let old = repo.insert(news_draft("Old", 2), 1).await?;
        let new = repo.insert(news_draft("New", 20), 2).await?;
        repo.clear_order_index(old.id).await?;
        repo.clear_order_index(new.id).await?;

        assert_eq!(repo.max_order_index().await?, Some(0));
        let ids: Vec<i32> = repo.list().await?.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![indexed.id, new.id, old.id]);
        Ok(())
    }
}
