//! Development seed data: roles, one club and its three teams.

use serde::Serialize;
use thiserror::Error;

use clubadmin_auth::{Permission, PermissionSet, Role};
use clubadmin_core::{Club, ClubId, RoleId, Team, TeamId, TeamType, UserId};
use clubadmin_validation::StoreError;

use crate::store::InMemoryStore;

pub const SUPER_ADMIN_ROLE: &str = "super admin";
pub const CLUB_ADMIN_ROLE: &str = "club admin";
pub const TEST_CLUB: &str = "test club 1";

const TEST_TEAMS: [(&str, TeamType); 3] = [
    ("club1 team male", TeamType::Male),
    ("club1 team female", TeamType::Female),
    ("club1 team mixed", TeamType::Mixed),
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("have unexpected admin users length {0}")]
    UnexpectedAdminUsers(usize),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a seeding run inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    /// `false` when roles already existed and nothing was touched.
    pub inserted: bool,
    pub super_admin_role: Option<RoleId>,
    pub club_admin_role: Option<RoleId>,
    /// Set when the single existing user received the super admin role.
    pub admin_user: Option<UserId>,
    pub club: Option<ClubId>,
    pub teams: Vec<TeamId>,
}

/// Insert the seed data unless any role exists already.
///
/// When exactly one user exists and it has no role, it becomes the super
/// admin. Running this twice inserts nothing the second time.
pub fn insert_seed_data(store: &InMemoryStore) -> Result<SeedReport, SeedError> {
    tracing::info!("checking seed data: role");
    if store.roles.count()? > 0 {
        tracing::info!("roles present; skipping seed data");
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport {
        inserted: true,
        ..Default::default()
    };

    let super_admin = Role::new(RoleId::new(), SUPER_ADMIN_ROLE, PermissionSet::all());
    tracing::info!(role = %super_admin.name, "adding role");
    report.super_admin_role = Some(super_admin.id);
    let super_admin_id = super_admin.id;
    store.roles.upsert(super_admin)?;

    if store.users.count()? == 1 {
        let users = store.users.list()?;
        // A concurrent write can change the user set between count and list.
        let [admin] = users.as_slice() else {
            return Err(SeedError::UnexpectedAdminUsers(users.len()));
        };
        if admin.role_id.is_none() {
            tracing::info!(user_id = %admin.id, "attaching admin role to user");
            let mut admin = admin.clone();
            admin.role_id = Some(super_admin_id);
            report.admin_user = Some(admin.id);
            store.users.upsert(admin)?;
        }
    }

    let club_admin = Role::new(
        RoleId::new(),
        CLUB_ADMIN_ROLE,
        PermissionSet::empty()
            .with(Permission::CanReadOwnClubAthletes)
            .with(Permission::CanWriteOwnClubAthletes),
    );
    tracing::info!(role = %club_admin.name, "adding role");
    report.club_admin_role = Some(club_admin.id);
    store.roles.upsert(club_admin)?;

    let club = Club::new(ClubId::new(), TEST_CLUB);
    let club_id = club.id;
    report.club = Some(club_id);
    store.clubs.upsert(club)?;

    for (name, team_type) in TEST_TEAMS {
        let team = Team::new(TeamId::new(), name, team_type).in_club(club_id);
        report.teams.push(team.id);
        store.teams.upsert(team)?;
    }

    tracing::info!(
        club_id = %club_id,
        teams = report.teams.len(),
        "seed data inserted"
    );
    Ok(report)
}
