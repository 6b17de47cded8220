use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;
use tempfile::TempDir;
use todo_core::clock::{Clock, FixedClock, SystemClock};
use todo_core::db::{establish_connection, seed_defaults, DbPool};
use todo_core::dto::*;
use todo_core::error::CoreError;
use todo_core::repository::{ListRepository, SqliteRepository};
use todo_core::service::*;
use uuid::Uuid;

/// Every service wired against one temporary database.
struct TestApp {
    pool: DbPool,
    categories: CategoryService,
    priorities: PriorityService,
    statuses: StatusService,
    lists: ListService,
    tasks: Arc<TaskService>,
    notes: NoteService,
    users: UserService,
    _temp_dir: TempDir,
}

/// Helper function to create a test database
async fn setup_test_db() -> (DbPool, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");

    let pool = establish_connection(&db_path.to_string_lossy())
        .await
        .expect("Failed to establish test database connection");

    (pool, temp_dir)
}

async fn setup_app_with_clock(clock: Arc<dyn Clock>) -> TestApp {
    let (pool, temp_dir) = setup_test_db().await;
    let tasks = Arc::new(TaskService::new(
        Arc::new(SqliteRepository::new(pool.clone())),
        clock,
        chrono_tz::UTC,
    ));

    TestApp {
        categories: CategoryService::new(Arc::new(SqliteRepository::new(pool.clone()))),
        priorities: PriorityService::new(Arc::new(SqliteRepository::new(pool.clone()))),
        statuses: StatusService::new(Arc::new(SqliteRepository::new(pool.clone()))),
        lists: ListService::new(Arc::new(SqliteRepository::new(pool.clone())), tasks.clone()),
        notes: NoteService::new(Arc::new(SqliteRepository::new(pool.clone()))),
        users: UserService::new(Arc::new(SqliteRepository::new(pool.clone()))),
        tasks,
        pool,
        _temp_dir: temp_dir,
    }
}

async fn setup_app() -> TestApp {
    setup_app_with_clock(Arc::new(SystemClock)).await
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn list_dto(name: &str, user_id: Option<Uuid>) -> ToDoListDto {
    ToDoListDto {
        name: name.to_string(),
        description: format!("{} description", name),
        creation_date: at(2024, 1, 1, 9, 0),
        user_id,
        ..Default::default()
    }
}

fn task_dto(name: &str, list_id: i64) -> ToDoTaskDto {
    ToDoTaskDto {
        name: name.to_string(),
        description: format!("{} description", name),
        creation_date: at(2024, 1, 1, 9, 0),
        due_date: at(2024, 6, 1, 9, 0),
        reminder_date: at(2024, 5, 31, 9, 0),
        list_id,
        ..Default::default()
    }
}

/// Helper function to create a test list
async fn create_test_list(app: &TestApp, name: &str, user_id: Option<Uuid>) -> i64 {
    app.lists
        .add(Some(list_dto(name, user_id)))
        .await
        .expect("Failed to create test list")
}

/// Helper function to create a test task
async fn create_test_task(app: &TestApp, dto: ToDoTaskDto) -> i64 {
    app.tasks.add(Some(dto)).await.expect("Failed to create test task")
}

#[tokio::test]
async fn test_category_task_end_to_end() {
    let app = setup_app().await;

    let category_id = app
        .categories
        .add(Some(TaskCategoryDto {
            name: "Blue".to_string(),
            description: "Blue category".to_string(),
            ..Default::default()
        }))
        .await
        .unwrap();

    let list_id = create_test_list(&app, "Groceries", None).await;
    let task_id = create_test_task(
        &app,
        ToDoTaskDto {
            category_id: Some(category_id),
            ..task_dto("Milk", list_id)
        },
    )
    .await;

    let categories = app.categories.get_all().await.unwrap();
    let blue: Vec<_> = categories.iter().filter(|c| c.name == "Blue").collect();
    assert_eq!(blue.len(), 1);
    assert_eq!(blue[0].description, "Blue category");

    let task = app.tasks.get_by_id(task_id).await.unwrap();
    assert_eq!(task.category_id, Some(category_id));

    let category = app.categories.get_by_id(category_id).await.unwrap();
    assert_eq!(category.tasks.len(), 1);
    assert_eq!(category.tasks[0].id, task_id);
}

#[tokio::test]
async fn test_duplicate_names_are_rejected_case_insensitively() {
    let app = setup_app().await;

    app.priorities
        .add(Some(TaskPriorityDto {
            name: "Urgent".to_string(),
            ..Default::default()
        }))
        .await
        .unwrap();

    let duplicate = app
        .priorities
        .add(Some(TaskPriorityDto {
            name: "URGENT".to_string(),
            ..Default::default()
        }))
        .await;
    assert!(matches!(duplicate, Err(CoreError::AlreadyExists(_))));

    let id = app
        .priorities
        .add(Some(TaskPriorityDto {
            name: "Someday".to_string(),
            ..Default::default()
        }))
        .await
        .unwrap();
    let stored = app.priorities.get_by_id(id).await.unwrap();
    assert_eq!(stored.name, "Someday");
    assert_eq!(app.priorities.get_all().await.unwrap().len(), 2);

    create_test_list(&app, "Łódź", None).await;
    let duplicate = app.lists.add(Some(list_dto("łódź", None))).await;
    assert!(matches!(duplicate, Err(CoreError::AlreadyExists(_))));
    let found = app.lists.get_by_name("ŁÓDŹ").await.unwrap();
    assert_eq!(found.name, "Łódź");

    app.users.register("Łukasz").await.unwrap();
    let duplicate = app.users.register("łukasz").await;
    assert!(matches!(duplicate, Err(CoreError::AlreadyExists(_))));
    assert_eq!(app.users.get_by_name("ŁUKASZ").await.unwrap().name, "Łukasz");
}

#[tokio::test]
async fn test_rename_collision_and_self_rename() {
    let app = setup_app().await;

    let first = create_test_list(&app, "Work", None).await;
    create_test_list(&app, "Home", None).await;

    let clash = app
        .lists
        .update(first, Some(list_dto("home", None)))
        .await;
    assert!(matches!(clash, Err(CoreError::AlreadyExists(_))));

    // Keeping its own name is not a collision
    let mut same = list_dto("Work", None);
    same.description = "Office things".to_string();
    app.lists.update(first, Some(same)).await.unwrap();
    assert_eq!(
        app.lists.get_by_id(first).await.unwrap().description,
        "Office things"
    );
}

#[tokio::test]
async fn test_null_payloads() {
    let app = setup_app().await;

    assert!(matches!(
        app.statuses.add(None).await,
        Err(CoreError::NullArgument(_))
    ));
    assert!(matches!(
        app.tasks.update(1, None).await,
        Err(CoreError::NullArgument(_))
    ));
    assert!(matches!(
        app.notes.add(None).await,
        Err(CoreError::NullArgument(_))
    ));
}

#[tokio::test]
async fn test_missing_rows_are_not_found() {
    let app = setup_app().await;

    assert!(matches!(
        app.categories.get_by_id(42).await,
        Err(CoreError::NotFound(_))
    ));
    assert!(matches!(
        app.lists.delete(42).await,
        Err(CoreError::NotFound(_))
    ));
    assert!(matches!(
        app.notes
            .update(
                42,
                Some(TaskNoteDto {
                    name: "text".to_string(),
                    task_id: 1,
                    ..Default::default()
                })
            )
            .await,
        Err(CoreError::NotFound(_))
    ));
    assert!(matches!(
        app.lists.change_visibility(42, false).await,
        Err(CoreError::NotFound(_))
    ));
    assert!(matches!(
        app.tasks.set_reminder_time(42, Utc::now()).await,
        Err(CoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_removes_one_row() {
    let app = setup_app().await;
    let list_id = create_test_list(&app, "Chores", None).await;
    let first = create_test_task(&app, task_dto("Sweep", list_id)).await;
    create_test_task(&app, task_dto("Mop", list_id)).await;

    assert_eq!(app.tasks.delete(first).await.unwrap(), first);

    let remaining = app.tasks.get_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Mop");
    assert!(matches!(
        app.tasks.get_by_id(first).await,
        Err(CoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_update_only_touches_mutable_fields() {
    let app = setup_app().await;
    let list_id = create_test_list(&app, "Errands", None).await;
    let other_list = create_test_list(&app, "Elsewhere", None).await;
    let task_id = create_test_task(&app, task_dto("Post office", list_id)).await;

    let changed = ToDoTaskDto {
        name: "Bank".to_string(),
        important: true,
        is_completed: true,
        list_id: other_list,
        creation_date: at(2020, 1, 1, 0, 0),
        ..task_dto("ignored", list_id)
    };
    app.tasks.update(task_id, Some(changed)).await.unwrap();

    let stored = app.tasks.get_by_id(task_id).await.unwrap();
    assert_eq!(stored.name, "Bank");
    assert!(stored.important);
    assert!(stored.is_completed);
    assert_eq!(stored.list_id, list_id);
    assert_eq!(stored.creation_date, at(2024, 1, 1, 9, 0));
    assert_eq!(app.tasks.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_set_reminder_time_rules() {
    let app = setup_app().await;
    let list_id = create_test_list(&app, "Health", None).await;
    let task_id = create_test_task(&app, task_dto("Dentist", list_id)).await;

    let too_early = app
        .tasks
        .set_reminder_time(task_id, at(2024, 1, 1, 9, 0))
        .await;
    assert!(matches!(too_early, Err(CoreError::InvalidArgument(_))));

    let when = at(2024, 2, 10, 7, 30);
    app.tasks.set_reminder_time(task_id, when).await.unwrap();
    assert_eq!(app.tasks.get_by_id(task_id).await.unwrap().reminder_date, when);
}

#[tokio::test]
async fn test_reminder_occurs_only_when_armed_and_reached() {
    let now = at(2024, 3, 15, 12, 0);
    let app = setup_app_with_clock(Arc::new(FixedClock(now))).await;
    let user = app.users.register("alice").await.unwrap();
    let list_id = create_test_list(&app, "Reminders", Some(user.id)).await;

    let past = create_test_task(
        &app,
        ToDoTaskDto {
            reminder: true,
            reminder_date: now - Duration::minutes(5),
            ..task_dto("Call mom", list_id)
        },
    )
    .await;
    let future = create_test_task(
        &app,
        ToDoTaskDto {
            reminder: true,
            reminder_date: now + Duration::minutes(5),
            ..task_dto("Pay rent", list_id)
        },
    )
    .await;
    let disarmed = create_test_task(
        &app,
        ToDoTaskDto {
            reminder: false,
            reminder_date: now - Duration::days(1),
            ..task_dto("Water plants", list_id)
        },
    )
    .await;

    assert!(app.tasks.check_if_reminder_time_occurs(past).await.unwrap());
    assert!(!app.tasks.check_if_reminder_time_occurs(future).await.unwrap());
    assert!(!app.tasks.check_if_reminder_time_occurs(disarmed).await.unwrap());

    let due = app.lists.get_all_user_reminder_tasks(user.id).await.unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, past);

    app.tasks.turn_on_off_reminder(disarmed, true).await.unwrap();
    assert!(app.tasks.check_if_reminder_time_occurs(disarmed).await.unwrap());
}

#[tokio::test]
async fn test_todays_tasks_follow_the_calendar_day() {
    let due = at(2024, 3, 15, 8, 0);

    for (now, expected) in [
        (at(2024, 3, 15, 0, 0), 1),
        (at(2024, 3, 15, 23, 59), 1),
        (at(2024, 3, 16, 0, 0), 0),
    ] {
        let app = setup_app_with_clock(Arc::new(FixedClock(now))).await;
        let user = app.users.register("bob").await.unwrap();
        let list_id = create_test_list(&app, "Week", Some(user.id)).await;
        create_test_task(
            &app,
            ToDoTaskDto {
                due_date: due,
                ..task_dto("Standup", list_id)
            },
        )
        .await;

        assert_eq!(app.tasks.get_tasks_for_today().await.unwrap().len(), expected);
        assert_eq!(
            app.lists.get_all_user_todays_tasks(user.id).await.unwrap().len(),
            expected
        );
    }
}

#[tokio::test]
async fn test_flag_views() {
    let app = setup_app().await;
    let list_id = create_test_list(&app, "Mixed", None).await;

    create_test_task(
        &app,
        ToDoTaskDto {
            daily: true,
            ..task_dto("Stretch", list_id)
        },
    )
    .await;
    create_test_task(
        &app,
        ToDoTaskDto {
            important: true,
            is_completed: true,
            ..task_dto("Taxes", list_id)
        },
    )
    .await;
    create_test_task(&app, task_dto("Read", list_id)).await;

    assert_eq!(app.tasks.get_daily_tasks().await.unwrap().len(), 1);
    assert_eq!(app.tasks.get_important_tasks().await.unwrap().len(), 1);
    assert_eq!(app.tasks.get_completed_tasks().await.unwrap().len(), 1);
    assert_eq!(app.tasks.get_uncompleted_tasks().await.unwrap().len(), 2);
    assert_eq!(app.tasks.get_all_for_list(list_id).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_user_aggregates_skip_smart_lists_and_other_users() {
    let now = at(2024, 3, 15, 12, 0);
    let app = setup_app_with_clock(Arc::new(FixedClock(now))).await;
    let carol = app.users.register("carol").await.unwrap();
    let dave = app.users.register("dave").await.unwrap();

    let work = create_test_list(&app, "Work", Some(carol.id)).await;
    let smart = create_test_list(&app, "Important", Some(carol.id)).await;
    let other = create_test_list(&app, "Dave stuff", Some(dave.id)).await;

    for list_id in [work, smart, other] {
        create_test_task(
            &app,
            ToDoTaskDto {
                important: true,
                daily: true,
                due_date: now,
                ..task_dto("Flagged", list_id)
            },
        )
        .await;
    }

    assert_eq!(
        app.lists.get_all_user_important_tasks(carol.id).await.unwrap().len(),
        1
    );
    assert_eq!(
        app.lists.get_all_user_daily_tasks(carol.id).await.unwrap().len(),
        1
    );

    let counts = app.lists.smart_list_counts(carol.id).await.unwrap();
    assert_eq!((counts.important, counts.daily, counts.today), (1, 1, 1));

    let carol_lists = app.lists.get_all_for_user(carol.id).await.unwrap();
    assert_eq!(carol_lists.len(), 2);
}

#[tokio::test]
async fn test_copy_list_clones_tasks() {
    let app = setup_app().await;
    seed_defaults(&app.pool).await.unwrap();
    let owner = app.users.register("erin").await.unwrap();
    let list_id = create_test_list(&app, "Trip", Some(owner.id)).await;

    let mut originals = Vec::new();
    for name in ["Passport", "Tickets", "Charger"] {
        let id = create_test_task(
            &app,
            ToDoTaskDto {
                category_id: Some(1),
                priority_id: Some(2),
                status_id: Some(3),
                ..task_dto(name, list_id)
            },
        )
        .await;
        originals.push(id);
    }
    app.notes
        .add(Some(TaskNoteDto {
            name: "In the drawer".to_string(),
            task_id: originals[0],
            ..Default::default()
        }))
        .await
        .unwrap();

    let copy_id = app.lists.copy(list_id).await.unwrap();
    assert_ne!(copy_id, list_id);

    let copy = app.lists.get_by_id(copy_id).await.unwrap();
    assert_eq!(copy.name, "Trip_Copy");
    assert_eq!(copy.description, "Trip description_Copy");
    assert_eq!(copy.user_id, None);
    assert_eq!(copy.number_of_tasks, 3);

    for task in &copy.tasks {
        assert!(!originals.contains(&task.id));
        assert_eq!(task.list_id, copy_id);
        assert_eq!(task.category_id, None);
        assert_eq!(task.priority_id, None);
        assert_eq!(task.status_id, None);
        assert!(app.notes.get_all_for_task(task.id).await.unwrap().is_empty());
    }

    // Source list is untouched
    let source = app.lists.get_by_id(list_id).await.unwrap();
    assert_eq!(source.user_id, Some(owner.id));
    assert_eq!(source.number_of_tasks, 3);
}

#[tokio::test]
async fn test_copy_guards() {
    let app = setup_app().await;
    let list_id = create_test_list(&app, "Once", None).await;

    app.lists.copy(list_id).await.unwrap();
    assert!(matches!(
        app.lists.copy(list_id).await,
        Err(CoreError::AlreadyExists(_))
    ));
    assert!(matches!(
        app.lists.copy(999).await,
        Err(CoreError::NotFound(_))
    ));

    let repo: SqliteRepository<todo_core::models::ToDoList> = SqliteRepository::new(app.pool.clone());
    assert!(matches!(
        repo.copy_list(999).await,
        Err(CoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_visibility_toggle() {
    let app = setup_app().await;
    let list_id = create_test_list(&app, "Secret", None).await;

    app.lists.change_visibility(list_id, false).await.unwrap();
    assert!(app.lists.get_by_id(list_id).await.unwrap().is_hidden);

    app.lists.change_visibility(list_id, true).await.unwrap();
    assert!(!app.lists.get_by_id(list_id).await.unwrap().is_hidden);
}

#[tokio::test]
async fn test_deleting_list_cascades_to_tasks_and_notes() {
    let app = setup_app().await;
    let list_id = create_test_list(&app, "Temporary", None).await;
    let task_id = create_test_task(&app, task_dto("Scratch", list_id)).await;
    app.notes
        .add(Some(TaskNoteDto {
            name: "scribble".to_string(),
            task_id,
            ..Default::default()
        }))
        .await
        .unwrap();

    app.lists.delete(list_id).await.unwrap();

    assert!(app.tasks.get_all().await.unwrap().is_empty());
    assert!(app.notes.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deleting_category_clears_task_reference() {
    let app = setup_app().await;
    seed_defaults(&app.pool).await.unwrap();
    let list_id = create_test_list(&app, "Paint", None).await;
    let task_id = create_test_task(
        &app,
        ToDoTaskDto {
            category_id: Some(2),
            ..task_dto("Fence", list_id)
        },
    )
    .await;

    app.categories.delete(2).await.unwrap();

    assert_eq!(app.tasks.get_by_id(task_id).await.unwrap().category_id, None);
}

#[tokio::test]
async fn test_notes_follow_their_task() {
    let app = setup_app().await;
    let list_id = create_test_list(&app, "Reading", None).await;
    let task_id = create_test_task(&app, task_dto("Novel", list_id)).await;

    let note_id = app
        .notes
        .add(Some(TaskNoteDto {
            name: "Chapter 3".to_string(),
            task_id,
            ..Default::default()
        }))
        .await
        .unwrap();
    app.notes
        .update(
            note_id,
            Some(TaskNoteDto {
                name: "Chapter 4".to_string(),
                task_id,
                ..Default::default()
            }),
        )
        .await
        .unwrap();

    let task = app.tasks.get_by_id(task_id).await.unwrap();
    assert_eq!(task.number_of_notes, 1);
    assert_eq!(task.notes[0].name, "Chapter 4");
}

#[tokio::test]
async fn test_users() {
    let app = setup_app().await;

    let frank = app.users.register("frank").await.unwrap();
    assert_eq!(frank.number_of_lists, 0);
    assert!(matches!(
        app.users.register("Frank").await,
        Err(CoreError::AlreadyExists(_))
    ));
    assert!(matches!(
        app.users.register("   ").await,
        Err(CoreError::InvalidArgument(_))
    ));

    create_test_list(&app, "Frank's list", Some(frank.id)).await;
    let found = app.users.get_by_name("FRANK").await.unwrap();
    assert_eq!(found.id, frank.id);
    assert_eq!(found.number_of_lists, 1);
    assert_eq!(app.users.get_by_id(frank.id).await.unwrap().name, "frank");

    assert!(matches!(
        app.users.get_by_name("nobody").await,
        Err(CoreError::NotFound(_))
    ));
    assert_eq!(app.users.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_seed_defaults_is_idempotent() {
    let app = setup_app().await;

    seed_defaults(&app.pool).await.unwrap();
    seed_defaults(&app.pool).await.unwrap();

    let categories = app.categories.get_all().await.unwrap();
    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Blue", "Green", "Red"]);
    assert_eq!(app.priorities.get_all().await.unwrap().len(), 3);

    let status = app.statuses.get_by_name("in progress").await.unwrap();
    assert_eq!(status.description, "Task already started but not completed.");
}
