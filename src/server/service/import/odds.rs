//! Importers of bookmakers, bet types and pre-match odds.

use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{lookup::ReferenceLookup, upsert::upsert_by_key},
    error::AppError,
    model::import::{FailurePolicy, FkMissPolicy, ImportKind, ImportReport},
    service::import::{
        records::{NamedRecord, OddsRecord},
        runner::{required, RecordImporter},
    },
};

fn bookmaker_model(id: i64, name: String) -> entity::bookmaker::ActiveModel {
    entity::bookmaker::ActiveModel {
        api_bookmaker_id: Set(id),
        name: Set(name),
        ..Default::default()
    }
}

fn bet_model(id: i64, name: String) -> entity::bet::ActiveModel {
    entity::bet::ActiveModel {
        api_bet_id: Set(id),
        name: Set(name),
        ..Default::default()
    }
}

pub struct BookmakerImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookmakerImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for BookmakerImporter<'_> {
    type Record = NamedRecord;

    const KIND: ImportKind = ImportKind::Bookmakers;
    const FAILURE: FailurePolicy = FailurePolicy::Abort;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Error;

    async fn import_record(
        &self,
        record: NamedRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let (outcome, _) = upsert_by_key::<entity::prelude::Bookmaker, _>(
            self.db,
            &[entity::bookmaker::Column::ApiBookmakerId],
            bookmaker_model(record.id, record.name),
        )
        .await?;
        report.record(outcome);

        Ok(())
    }
}

pub struct BetImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BetImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for BetImporter<'_> {
    type Record = NamedRecord;

    const KIND: ImportKind = ImportKind::Bets;
    const FAILURE: FailurePolicy = FailurePolicy::Abort;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Error;

    async fn import_record(
        &self,
        record: NamedRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let (outcome, _) = upsert_by_key::<entity::prelude::Bet, _>(
            self.db,
            &[entity::bet::Column::ApiBetId],
            bet_model(record.id, record.name),
        )
        .await?;
        report.record(outcome);

        Ok(())
    }
}

/// Imports the odds of one fixture per record, in a transaction.
///
/// Bookmakers and bet types named in the record are upserted inline, so odds never
/// miss those references. Each odd is keyed by fixture, bookmaker, bet and value label.
pub struct OddsImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OddsImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for OddsImporter<'_> {
    type Record = OddsRecord;

    const KIND: ImportKind = ImportKind::Odds;
    const FAILURE: FailurePolicy = FailurePolicy::Collect;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Skip;

    async fn import_record(
        &self,
        record: OddsRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let fixture_id = required(
            ReferenceLookup::new(self.db)
                .fixture(record.fixture.id)
                .await?,
            "fixture",
            record.fixture.id,
        )?;
        let updated_at = record.update.map(|update| update.with_timezone(&Utc));

        let txn = self.db.begin().await?;
        let mut tally = ImportReport::new(Self::KIND);

        for bookmaker in record.bookmakers {
            let (_, bookmaker_row) = upsert_by_key::<entity::prelude::Bookmaker, _>(
                &txn,
                &[entity::bookmaker::Column::ApiBookmakerId],
                bookmaker_model(bookmaker.id, bookmaker.name),
            )
            .await?;

            for bet in bookmaker.bets {
                let (_, bet_row) = upsert_by_key::<entity::prelude::Bet, _>(
                    &txn,
                    &[entity::bet::Column::ApiBetId],
                    bet_model(bet.id, bet.name),
                )
                .await?;

                for value in bet.values {
                    let model = entity::odd::ActiveModel {
                        fixture_id: Set(fixture_id),
                        bookmaker_id: Set(bookmaker_row.id),
                        bet_id: Set(bet_row.id),
                        value: Set(value.label()),
                        odd: Set(value.odd),
                        updated_at: Set(updated_at),
                        ..Default::default()
                    };
                    let (outcome, _) = upsert_by_key::<entity::prelude::Odd, _>(
                        &txn,
                        &[
                            entity::odd::Column::FixtureId,
                            entity::odd::Column::BookmakerId,
                            entity::odd::Column::BetId,
                            entity::odd::Column::Value,
                        ],
                        model,
                    )
                    .await?;
                    tally.record(outcome);
                }
            }
        }

        txn.commit().await?;
        report.absorb(&tally);

        Ok(())
    }
}
