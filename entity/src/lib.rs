//! SeaORM entities for the football statistics schema.
//!
//! Every provider-sourced table carries a surrogate `id` alongside the upstream
//! identifier (`api_*_id`) or a deterministic `external_key` used as the upsert key.
//! Models derive `serde` and `utoipa::ToSchema` so they can be served and documented
//! directly as API resources. `user` and `password_reset` deliberately do not derive
//! `Serialize`.

pub mod prelude;

pub mod bet;
pub mod bookmaker;
pub mod coach;
pub mod country;
pub mod fixture;
pub mod fixture_event;
pub mod fixture_h2h;
pub mod injury;
pub mod league;
pub mod lineup;
pub mod lineup_player;
pub mod odd;
pub mod password_reset;
pub mod player;
pub mod player_fixture_stat;
pub mod player_season_stat;
pub mod player_top_stat;
pub mod season;
pub mod sidelined;
pub mod team;
pub mod transfer;
pub mod trophy;
pub mod user;
pub mod venue;
