//! Importers of the reference data: countries, leagues with seasons, teams, venues and
//! coaches.

use sea_orm::{ActiveValue::Set, DatabaseConnection};

use crate::server::{
    data::{lookup::ReferenceLookup, upsert::upsert_by_key},
    error::AppError,
    model::import::{FailurePolicy, FkMissPolicy, ImportKind, ImportReport},
    service::import::{
        records::{CoachRecord, CountryRecord, LeagueRecord, TeamRecord, VenueRecord},
        runner::{optional, RecordImporter},
    },
};

pub struct CountryImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for CountryImporter<'_> {
    type Record = CountryRecord;

    const KIND: ImportKind = ImportKind::Countries;
    const FAILURE: FailurePolicy = FailurePolicy::Abort;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Error;

    async fn import_record(
        &self,
        record: CountryRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let model = entity::country::ActiveModel {
            name: Set(record.name),
            code: Set(record.code),
            flag: Set(record.flag),
            ..Default::default()
        };

        let (outcome, _) = upsert_by_key::<entity::prelude::Country, _>(
            self.db,
            &[entity::country::Column::Name],
            model,
        )
        .await?;
        report.record(outcome);

        Ok(())
    }
}

/// Imports leagues and the seasons listed with them.
///
/// The country is resolved by name and left empty when it is not known locally.
pub struct LeagueImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeagueImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for LeagueImporter<'_> {
    type Record = LeagueRecord;

    const KIND: ImportKind = ImportKind::Leagues;
    const FAILURE: FailurePolicy = FailurePolicy::Abort;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Skip;

    async fn import_record(
        &self,
        record: LeagueRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let lookup = ReferenceLookup::new(self.db);

        let country_id = match record.country.and_then(|country| country.name) {
            Some(name) => lookup.country_by_name(&name).await?,
            None => None,
        };

        let model = entity::league::ActiveModel {
            api_league_id: Set(record.league.id),
            name: Set(record.league.name),
            league_type: Set(record.league.league_type),
            logo: Set(record.league.logo),
            country_id: Set(country_id),
            ..Default::default()
        };
        let (outcome, league) = upsert_by_key::<entity::prelude::League, _>(
            self.db,
            &[entity::league::Column::ApiLeagueId],
            model,
        )
        .await?;
        report.record(outcome);

        for season in record.seasons {
            let model = entity::season::ActiveModel {
                league_id: Set(league.id),
                year: Set(season.year),
                start_date: Set(season.start),
                end_date: Set(season.end),
                current: Set(season.current),
                coverage: Set(season.coverage),
                ..Default::default()
            };
            upsert_by_key::<entity::prelude::Season, _>(
                self.db,
                &[
                    entity::season::Column::LeagueId,
                    entity::season::Column::Year,
                ],
                model,
            )
            .await?;
        }

        Ok(())
    }
}

/// Imports teams, upserting the venue embedded in each record first.
pub struct TeamImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for TeamImporter<'_> {
    type Record = TeamRecord;

    const KIND: ImportKind = ImportKind::Teams;
    const FAILURE: FailurePolicy = FailurePolicy::Abort;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Error;

    async fn import_record(
        &self,
        record: TeamRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let team = record.team;

        let mut venue_id = None;
        if let Some(venue) = record.venue {
            if let Some(api_venue_id) = venue.id {
                let model = entity::venue::ActiveModel {
                    api_venue_id: Set(api_venue_id),
                    name: Set(venue.name.unwrap_or_default()),
                    address: Set(venue.address),
                    city: Set(venue.city),
                    country: Set(venue.country.or_else(|| team.country.clone())),
                    capacity: Set(venue.capacity),
                    surface: Set(venue.surface),
                    image: Set(venue.image),
                    ..Default::default()
                };
                let (_, venue) = upsert_by_key::<entity::prelude::Venue, _>(
                    self.db,
                    &[entity::venue::Column::ApiVenueId],
                    model,
                )
                .await?;
                venue_id = Some(venue.id);
            }
        }

        let model = entity::team::ActiveModel {
            api_team_id: Set(team.id),
            name: Set(team.name),
            code: Set(team.code),
            country: Set(team.country),
            founded: Set(team.founded),
            national: Set(team.national),
            logo: Set(team.logo),
            venue_id: Set(venue_id),
            ..Default::default()
        };
        let (outcome, _) = upsert_by_key::<entity::prelude::Team, _>(
            self.db,
            &[entity::team::Column::ApiTeamId],
            model,
        )
        .await?;
        report.record(outcome);

        Ok(())
    }
}

pub struct VenueImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for VenueImporter<'_> {
    type Record = VenueRecord;

    const KIND: ImportKind = ImportKind::Venues;
    const FAILURE: FailurePolicy = FailurePolicy::Abort;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Error;

    async fn import_record(
        &self,
        record: VenueRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let model = entity::venue::ActiveModel {
            api_venue_id: Set(record.id),
            name: Set(record.name),
            address: Set(record.address),
            city: Set(record.city),
            country: Set(record.country),
            capacity: Set(record.capacity),
            surface: Set(record.surface),
            image: Set(record.image),
            ..Default::default()
        };

        let (outcome, _) = upsert_by_key::<entity::prelude::Venue, _>(
            self.db,
            &[entity::venue::Column::ApiVenueId],
            model,
        )
        .await?;
        report.record(outcome);

        Ok(())
    }
}

/// Imports coaches; the current team is optional and left empty when unknown.
pub struct CoachImporter<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoachImporter<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecordImporter for CoachImporter<'_> {
    type Record = CoachRecord;

    const KIND: ImportKind = ImportKind::Coaches;
    const FAILURE: FailurePolicy = FailurePolicy::Abort;
    const FK_MISS: FkMissPolicy = FkMissPolicy::Skip;

    async fn import_record(
        &self,
        record: CoachRecord,
        report: &mut ImportReport,
    ) -> Result<(), AppError> {
        let lookup = ReferenceLookup::new(self.db);
        let team_id = optional(record.team.and_then(|team| team.id), |id| {
            lookup.team(id)
        })
        .await?;

        let model = entity::coach::ActiveModel {
            api_coach_id: Set(record.id),
            name: Set(record.name),
            firstname: Set(record.firstname),
            lastname: Set(record.lastname),
            age: Set(record.age),
            birth_date: Set(record.birth.date),
            nationality: Set(record.nationality),
            photo: Set(record.photo),
            team_id: Set(team_id),
            ..Default::default()
        };

        let (outcome, _) = upsert_by_key::<entity::prelude::Coach, _>(
            self.db,
            &[entity::coach::Column::ApiCoachId],
            model,
        )
        .await?;
        report.record(outcome);

        Ok(())
    }
}
