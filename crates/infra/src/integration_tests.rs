//! Integration tests for the seeded write pipeline.
//!
//! Tests: Seed → Session → WriteGate (access + validation) → InMemoryStore
//!
//! Verifies:
//! - Athletes can only join teams whose type fits their gender
//! - A team cannot be retyped away from its members
//! - Club access follows the session's home club

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use clubadmin_auth::{Permission, Session};
    use clubadmin_core::{
        Athlete, AthleteId, AthleteInput, ClubId, ClubInput, Collection, Gender, RelationInput,
        Team, TeamId, TeamInput, TeamType, User, UserId,
    };
    use clubadmin_validation::{Store, WriteGate, WriteInput, WriteRejection};

    use crate::seed::{SeedReport, insert_seed_data};
    use crate::store::InMemoryStore;

    fn setup() -> (Arc<InMemoryStore>, SeedReport, WriteGate) {
        let store = Arc::new(InMemoryStore::new());
        let report = insert_seed_data(&store).unwrap();
        (store, report, WriteGate::new())
    }

    fn team_named(store: &InMemoryStore, name: &str) -> Team {
        store
            .teams
            .find(|t| t.team_name == name)
            .unwrap()
            .into_iter()
            .next()
            .unwrap()
    }

    fn club_admin(store: &InMemoryStore, report: &SeedReport) -> Session {
        let role = store.roles.get(&report.club_admin_role.unwrap()).unwrap().unwrap();
        Session::new(UserId::new(), "club admin")
            .with_role(role.permissions)
            .with_home_club(report.club.unwrap())
    }

    /// Run the gate and, when it passes, apply the athlete to the store.
    fn save_athlete(
        gate: &WriteGate,
        store: &InMemoryStore,
        session: Option<&Session>,
        id: AthleteId,
        input: &AthleteInput,
    ) -> Result<Athlete, WriteRejection> {
        let existing = store.athletes.get(&id).unwrap();
        let write = WriteInput::Athlete {
            proposed: input,
            existing: existing.as_ref(),
        };
        gate.check_write(session, &write, store)?;

        let mut athlete = existing.unwrap_or_else(|| Athlete::new(id, "", "", 0));
        if let Some(first) = &input.first_name {
            athlete.first_name = first.clone();
        }
        if let Some(last) = &input.last_name {
            athlete.last_name = last.clone();
        }
        if let Some(year) = input.birth_year {
            athlete.birth_year = year;
        }
        if input.gender.is_some() {
            athlete.gender = input.gender;
        }
        athlete.team_id = RelationInput::resolve(input.team.as_ref(), athlete.team_id);
        store.athletes.upsert(athlete.clone()).unwrap();
        Ok(athlete)
    }

    fn athlete_input(gender: Gender, team: TeamId) -> AthleteInput {
        AthleteInput {
            first_name: Some("test".into()),
            last_name: Some("athlete".into()),
            birth_year: Some(2004),
            gender: Some(gender),
            team: Some(RelationInput::Connect(team)),
            ..Default::default()
        }
    }

    #[test]
    fn athletes_join_matching_teams_only() {
        let (store, _, gate) = setup();
        let male = team_named(&store, "club1 team male");
        let female = team_named(&store, "club1 team female");
        let mixed = team_named(&store, "club1 team mixed");

        save_athlete(&gate, &store, None, AthleteId::new(), &athlete_input(Gender::Male, male.id))
            .unwrap();
        save_athlete(&gate, &store, None, AthleteId::new(), &athlete_input(Gender::Female, mixed.id))
            .unwrap();

        let rejected = save_athlete(
            &gate,
            &store,
            None,
            AthleteId::new(),
            &athlete_input(Gender::Male, female.id),
        );
        let Err(WriteRejection::Invalid(errors)) = rejected else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.messages(),
            vec!["The gender for athlete (MALE) does not match to the teamType FEMALE of team club1 team female"]
        );
        assert_eq!(store.athletes.count().unwrap(), 2);
    }

    #[test]
    fn moving_an_athlete_checks_the_new_team() {
        let (store, _, gate) = setup();
        let male = team_named(&store, "club1 team male");
        let female = team_named(&store, "club1 team female");
        let id = AthleteId::new();
        save_athlete(&gate, &store, None, id, &athlete_input(Gender::Male, male.id)).unwrap();

        let move_to_female = AthleteInput {
            team: Some(RelationInput::Connect(female.id)),
            ..Default::default()
        };
        assert!(save_athlete(&gate, &store, None, id, &move_to_female).is_err());

        let leave_team = AthleteInput {
            team: Some(RelationInput::Disconnect),
            ..Default::default()
        };
        let saved = save_athlete(&gate, &store, None, id, &leave_team).unwrap();
        assert_eq!(saved.team_id, None);

        let become_female = AthleteInput {
            gender: Some(Gender::Female),
            team: Some(RelationInput::Connect(female.id)),
            ..Default::default()
        };
        let saved = save_athlete(&gate, &store, None, id, &become_female).unwrap();
        assert_eq!(saved.team_id, Some(female.id));
    }

    #[test]
    fn team_cannot_be_retyped_away_from_members() {
        let (store, _, gate) = setup();
        let mixed = team_named(&store, "club1 team mixed");
        save_athlete(&gate, &store, None, AthleteId::new(), &athlete_input(Gender::Female, mixed.id))
            .unwrap();

        let assert_retype = |team_type: TeamType, ok: bool| {
            let proposed = TeamInput {
                team_type: Some(team_type),
                ..Default::default()
            };
            let write = WriteInput::Team {
                proposed: &proposed,
                existing: Some(&mixed),
            };
            assert_eq!(gate.check_write(None, &write, &*store).is_ok(), ok, "{team_type}");
        };
        assert_retype(TeamType::Male, false);
        assert_retype(TeamType::Female, true);
        assert_retype(TeamType::Mixed, true);

        assert_eq!(
            store.group_athlete_genders(&mixed.id).unwrap().len(),
            1
        );
    }

    #[test]
    fn club_admin_sees_and_edits_only_the_home_club() {
        let (store, report, gate) = setup();
        let session = club_admin(&store, &report);
        let home = store.clubs.get(&report.club.unwrap()).unwrap().unwrap();

        let read = gate.read_decision(Some(&session), Collection::Club);
        let visible: Vec<ClubId> = store
            .clubs
            .list()
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .filter(|id| read.permits_row(*id))
            .collect();
        assert_eq!(visible, vec![home.id]);

        let rename = ClubInput {
            club_name: Some("renamed".into()),
            ..Default::default()
        };
        let write = WriteInput::Club {
            proposed: &rename,
            existing: Some(&home),
        };
        assert_eq!(gate.check_write(Some(&session), &write, &*store), Ok(()));
        assert!(gate.check_delete(Some(&session), Collection::Club, ClubId::new()).is_err());

        assert!(!session.can(Permission::CanManageClubs));
        assert!(gate.check_delete(Some(&session), Collection::Role, report.super_admin_role.unwrap()).is_err());
    }

    #[test]
    fn seeded_super_admin_manages_everything() {
        let store = Arc::new(InMemoryStore::new());
        let admin = User::new(UserId::new(), "admin", "admin@example.com");
        store.users.upsert(admin.clone()).unwrap();
        let report = insert_seed_data(&store).unwrap();
        let gate = WriteGate::new();

        let stored = store.users.get(&admin.id).unwrap().unwrap();
        let role = store.roles.get(&stored.role_id.unwrap()).unwrap().unwrap();
        let session = Session::new(admin.id, "admin").with_role(role.permissions);

        for collection in Collection::ALL {
            assert!(gate.read_decision(Some(&session), collection).is_allowed(), "{collection}");
        }
        assert_eq!(
            gate.check_delete(Some(&session), Collection::Club, report.club.unwrap()),
            Ok(())
        );
        assert_eq!(
            gate.check_delete(Some(&session), Collection::User, UserId::new()),
            Ok(())
        );
    }
}
