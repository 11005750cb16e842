// End to end in memory test for the roster flow.
//
// Signs students up and unregisters them through the use case handlers, then
// reads the roster back through the query port.
use crate::modules::activities::adapters::outbound::activity_repository_in_memory::InMemoryActivityRepository;
use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use crate::tests::fixtures::commands::sign_up_for_activity::SignUpForActivityBuilder;
use crate::tests::fixtures::commands::unregister_from_activity::UnregisterFromActivityBuilder;
use std::sync::Arc;

#[tokio::test]
async fn keeps_the_roster_in_sign_up_order_across_sign_ups_and_unregisters() {
    let repository = Arc::new(InMemoryActivityRepository::seeded());
    let sign_up = SignUpForActivityHandler::new(repository.clone());
    let unregister = UnregisterFromActivityHandler::new(repository.clone());

    let before = repository.list_activities().await.unwrap()["Art Club"]
        .participants
        .clone();

    for email in ["a@mergington.edu", "b@mergington.edu", "c@mergington.edu"] {
        sign_up
            .handle(
                SignUpForActivityBuilder::new()
                    .activity_name("Art Club")
                    .email(email)
                    .build(),
            )
            .await
            .unwrap();
    }

    unregister
        .handle(
            UnregisterFromActivityBuilder::new()
                .activity_name("Art Club")
                .email("b@mergington.edu")
                .build(),
        )
        .await
        .unwrap();

    let activities = repository.list_activities().await.unwrap();
    let mut expected = before;
    expected.extend(["a@mergington.edu".to_string(), "c@mergington.edu".to_string()]);
    assert_eq!(activities["Art Club"].participants, expected);

    // other rosters are untouched
    assert_eq!(
        activities["Chess Club"].participants,
        vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );
}

#[tokio::test]
async fn allows_signing_up_again_after_unregistering() {
    let repository = Arc::new(InMemoryActivityRepository::seeded());
    let sign_up = SignUpForActivityHandler::new(repository.clone());
    let unregister = UnregisterFromActivityHandler::new(repository.clone());

    let command = SignUpForActivityBuilder::new()
        .activity_name("Chess Club")
        .email("michael@mergington.edu")
        .build();
    assert!(matches!(
        sign_up.handle(command.clone()).await,
        Err(ApplicationError::Domain(_))
    ));

    unregister
        .handle(UnregisterFromActivityBuilder::new().build())
        .await
        .unwrap();
    sign_up.handle(command).await.unwrap();

    let activities = repository.list_activities().await.unwrap();
    assert_eq!(
        activities["Chess Club"].participants,
        vec!["daniel@mergington.edu", "michael@mergington.edu"]
    );
}
