//! Importers of player and coach history: injuries, transfers, trophies and
//! sidelined periods.

use sea_orm::{ActiveValue::Set, ConnectionTrait, DatabaseConnection};
use serde::de::Error as _;

use crate::server::{
    data::{lookup::ReferenceLookup, upsert::upsert_by_key},
    error::{import::ImportError, AppError},
    model::import::{FailurePolicy, FkMissPolicy, ImportKind, ImportReport},
    service::import::{
        records::{
            parse_date, IdRef, InjuryRecord, SidelinedRecord, TransferRecord, TrophiesRecord,
        },
        runner::{key_part, optional, required, RecordImporter},
    },
};

pub struct InjuryImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InjuryImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for InjuryImporter<'_> {
    type Record = InjuryRecord;

    const KIND: ImportKind = ImportKind::Injuries;
    const FAILURE: FailurePolicy = FailurePolicy::Collect;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Skip;

    async fn import_record(
        &self,
        record: InjuryRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let lookup = ReferenceLookup::new(self.db);

        let player_id = required(
            lookup.player(record.player.id).await?,
            "player",
            record.player.id,
        )?;
        let team_id = required(lookup.team(record.team.id).await?, "team", record.team.id)?;

        let api_fixture_id = record.fixture.and_then(|fixture| fixture.id);
        let league = record.league.unwrap_or_default();
        let fixture_id = optional(api_fixture_id, |id| lookup.fixture(id)).await?;
        let league_id = optional(league.id, |id| lookup.league(id)).await?;

        let external_key = format!(
            "{}:{}:{}:{}",
            record.player.id,
            key_part(api_fixture_id),
            key_part(league.id),
            key_part(league.season),
        );

        let model = entity::injury::ActiveModel {
            external_key: Set(external_key),
            player_id: Set(player_id),
            team_id: Set(team_id),
            fixture_id: Set(fixture_id),
            league_id: Set(league_id),
            season: Set(league.season),
            injury_type: Set(record.player.injury_type),
            reason: Set(record.player.reason),
            ..Default::default()
        };
        let (outcome, _) = upsert_by_key::<entity::prelude::Injury, _>(
            self.db,
            &[entity::injury::Column::ExternalKey],
            model,
        )
        .await?;
        report.record(outcome);

        Ok(())
    }
}

/// Imports the transfer history of one player per record.
///
/// The clubs on either side are optional references.
pub struct TransferImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransferImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for TransferImporter<'_> {
    type Record = TransferRecord;

    const KIND: ImportKind = ImportKind::Transfers;
    const FAILURE: FailurePolicy = FailurePolicy::Collect;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Skip;

    async fn import_record(
        &self,
        record: TransferRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let lookup = ReferenceLookup::new(self.db);
        let player_id = required(
            lookup.player(record.player.id).await?,
            "player",
            record.player.id,
        )?;

        for transfer in record.transfers {
            let external_key = format!(
                "{}:{}:{}:{}",
                record.player.id,
                key_part(transfer.date.as_deref()),
                key_part(transfer.teams.team_in.id),
                key_part(transfer.teams.out.id),
            );
            let team_in_id = optional(transfer.teams.team_in.id, |id| lookup.team(id)).await?;
            let team_out_id = optional(transfer.teams.out.id, |id| lookup.team(id)).await?;

            let model = entity::transfer::ActiveModel {
                external_key: Set(external_key),
                player_id: Set(player_id),
                date: Set(parse_date(transfer.date.as_deref())),
                transfer_type: Set(transfer.transfer_type),
                team_in_id: Set(team_in_id),
                team_out_id: Set(team_out_id),
                ..Default::default()
            };
            let (outcome, _) = upsert_by_key::<entity::prelude::Transfer, _>(
                self.db,
                &[entity::transfer::Column::ExternalKey],
                model,
            )
            .await?;
            report.record(outcome);
        }

        Ok(())
    }
}

/// Local owner of a trophy or sidelined period.
struct Subject {
    player_id: Option<i32>,
    coach_id: Option<i32>,
    /// `p{id}` or `c{id}` with the provider id, used in external keys.
    key: String,
}

/// Resolves the player or coach a record belongs to.
///
/// # Returns
/// - `Ok(Subject)` - The resolved player or coach
/// - `Err(ImportError::MissingReference)` - The player or coach is not known locally
/// - `Err(ImportError::Decode)` - The record names neither
async fn resolve_subject<C: ConnectionTrait>(
    lookup: &ReferenceLookup<'_, C>,
    kind: ImportKind,
    player: Option<IdRef>,
    coach: Option<IdRef>,
) -> Result<Subject, AppError> {
    match (player, coach) {
        (Some(player), _) => Ok(Subject {
            player_id: Some(required(
                lookup.player(player.id).await?,
                "player",
                player.id,
            )?),
            coach_id: None,
            key: format!("p{}", player.id),
        }),
        (None, Some(coach)) => Ok(Subject {
            player_id: None,
            coach_id: Some(required(lookup.coach(coach.id).await?, "coach", coach.id)?),
            key: format!("c{}", coach.id),
        }),
        (None, None) => Err(ImportError::Decode {
            kind,
            source: serde_json::Error::custom("record names neither a player nor a coach"),
        }
        .into()),
    }
}

/// Imports the trophies of one player or coach per record.
///
/// An unknown player or coach is a record error rather than a skip.
pub struct TrophyImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrophyImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for TrophyImporter<'_> {
    type Record = TrophiesRecord;

    const KIND: ImportKind = ImportKind::Trophies;
    const FAILURE: FailurePolicy = FailurePolicy::Collect;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Error;

    async fn import_record(
        &self,
        record: TrophiesRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let lookup = ReferenceLookup::new(self.db);
        let subject = resolve_subject(&lookup, Self::KIND, record.player, record.coach).await?;

        for trophy in record.trophies {
            let external_key = format!(
                "{}:{}:{}:{}",
                subject.key,
                trophy.league,
                key_part(trophy.country.as_deref()),
                key_part(trophy.season.as_deref()),
            );

            let model = entity::trophy::ActiveModel {
                external_key: Set(external_key),
                player_id: Set(subject.player_id),
                coach_id: Set(subject.coach_id),
                league: Set(trophy.league),
                country: Set(trophy.country),
                season: Set(trophy.season),
                place: Set(trophy.place),
                ..Default::default()
            };
            let (outcome, _) = upsert_by_key::<entity::prelude::Trophy, _>(
                self.db,
                &[entity::trophy::Column::ExternalKey],
                model,
            )
            .await?;
            report.record(outcome);
        }

        Ok(())
    }
}

/// Imports the sidelined periods of one player or coach per record.
///
/// An unknown player or coach is a record error rather than a skip.
pub struct SidelinedImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SidelinedImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for SidelinedImporter<'_> {
    type Record = SidelinedRecord;

    const KIND: ImportKind = ImportKind::Sidelined;
    const FAILURE: FailurePolicy = FailurePolicy::Collect;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Error;

    async fn import_record(
        &self,
        record: SidelinedRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let lookup = ReferenceLookup::new(self.db);
        let subject = resolve_subject(&lookup, Self::KIND, record.player, record.coach).await?;

        for period in record.sidelined {
            let external_key = format!(
                "{}:{}:{}",
                subject.key,
                period.sidelined_type,
                key_part(period.start.as_deref()),
            );

            let model = entity::sidelined::ActiveModel {
                external_key: Set(external_key),
                player_id: Set(subject.player_id),
                coach_id: Set(subject.coach_id),
                sidelined_type: Set(period.sidelined_type),
                start_date: Set(parse_date(period.start.as_deref())),
                end_date: Set(parse_date(period.end.as_deref())),
                ..Default::default()
            };
            let (outcome, _) = upsert_by_key::<entity::prelude::Sidelined, _>(
                self.db,
                &[entity::sidelined::Column::ExternalKey],
                model,
            )
            .await?;
            report.record(outcome);
        }

        Ok(())
    }
}
