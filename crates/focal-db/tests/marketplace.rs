//! Persistence behavior tests against an in-memory database.

use focal_db::{BookingSide, Database, DirectoryFilter};
use uuid::Uuid;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn create_client(db: &Database, username: &str) -> String {
    let user_id = new_id();
    db.create_user(&user_id, username, &format!("{}@example.com", username), "hash")
        .unwrap();
    db.create_client_profile(&new_id(), &user_id).unwrap();
    user_id
}

/// Returns (user_id, profile_id).
fn create_photographer(db: &Database, username: &str) -> (String, String) {
    let user_id = new_id();
    db.create_user(&user_id, username, &format!("{}@example.com", username), "hash")
        .unwrap();
    let profile_id = new_id();
    db.create_photographer_profile(&profile_id, &user_id, "Starting out", "About me")
        .unwrap();
    (user_id, profile_id)
}

#[test]
fn favorite_toggle_twice_restores_original_state() {
    let db = Database::open_in_memory().unwrap();
    let client = create_client(&db, "alice");
    let (_, profile) = create_photographer(&db, "bob");

    assert!(!db.is_favorite(&client, &profile).unwrap());

    let added = db.toggle_favorite(&new_id(), &client, &profile).unwrap();
    assert!(added);
    assert!(db.is_favorite(&client, &profile).unwrap());

    let added = db.toggle_favorite(&new_id(), &client, &profile).unwrap();
    assert!(!added);
    assert!(!db.is_favorite(&client, &profile).unwrap());
}

#[test]
fn photo_like_toggle_updates_count() {
    let db = Database::open_in_memory().unwrap();
    let client = create_client(&db, "alice");
    let (_, profile) = create_photographer(&db, "bob");
    let photo_id = new_id();
    db.insert_photo(&photo_id, &profile, "photos/x.jpg", "portrait")
        .unwrap();

    let (liked, count) = db.toggle_photo_like(&new_id(), &client, &photo_id).unwrap();
    assert!(liked);
    assert_eq!(count, 1);

    let (liked, count) = db.toggle_photo_like(&new_id(), &client, &photo_id).unwrap();
    assert!(!liked);
    assert_eq!(count, 0);

    let photo = db.get_photo(&photo_id, Some(&client)).unwrap().unwrap();
    assert_eq!(photo.likes_count, 0);
    assert!(!photo.is_liked);
}

#[test]
fn booking_survives_single_soft_delete() {
    let db = Database::open_in_memory().unwrap();
    let client = create_client(&db, "alice");
    let (_, profile) = create_photographer(&db, "bob");

    let booking_id = new_id();
    db.insert_booking(&booking_id, &client, &profile, "Wedding in June", "+7 (900) 000-00-00")
        .unwrap();
    db.set_booking_status(&booking_id, "completed").unwrap();

    let removed = db
        .soft_delete_booking(&booking_id, BookingSide::Client)
        .unwrap();
    assert!(!removed);

    // Hidden from the client, still visible to the photographer
    assert!(db.list_sent_bookings(&client).unwrap().is_empty());
    assert_eq!(db.list_received_bookings(&profile).unwrap().len(), 1);
    assert!(db.get_booking(&booking_id).unwrap().is_some());
}

#[test]
fn booking_removed_once_both_sides_delete() {
    let db = Database::open_in_memory().unwrap();
    let client = create_client(&db, "alice");
    let (_, profile) = create_photographer(&db, "bob");

    let booking_id = new_id();
    db.insert_booking(&booking_id, &client, &profile, "Portraits", "+7 (900) 000-00-00")
        .unwrap();
    db.set_booking_status(&booking_id, "cancelled").unwrap();

    assert!(!db.soft_delete_booking(&booking_id, BookingSide::Photographer).unwrap());
    assert!(db.soft_delete_booking(&booking_id, BookingSide::Client).unwrap());

    assert!(db.get_booking(&booking_id).unwrap().is_none());
}

#[test]
fn cancelled_active_booking_stays_visible_to_both_sides() {
    let db = Database::open_in_memory().unwrap();
    let client = create_client(&db, "alice");
    let (_, profile) = create_photographer(&db, "bob");

    let booking_id = new_id();
    db.insert_booking(&booking_id, &client, &profile, "Reportage", "+7 (900) 000-00-00")
        .unwrap();
    db.set_booking_status(&booking_id, "in_progress").unwrap();

    // Cancelling an active booking is a status transition, not a delete
    db.set_booking_status(&booking_id, "cancelled").unwrap();

    let row = db.get_booking(&booking_id).unwrap().unwrap();
    assert_eq!(row.status, "cancelled");
    assert!(!row.deleted_by_client);
    assert!(!row.deleted_by_photographer);
    assert_eq!(db.list_sent_bookings(&client).unwrap().len(), 1);
    assert_eq!(db.list_received_bookings(&profile).unwrap().len(), 1);
}

#[test]
fn profile_view_counts_once_per_user() {
    let db = Database::open_in_memory().unwrap();
    let viewer = create_client(&db, "alice");
    let (_, profile) = create_photographer(&db, "bob");

    assert!(db
        .record_profile_view(&new_id(), &profile, Some(&viewer), None, None)
        .unwrap());
    assert!(!db
        .record_profile_view(&new_id(), &profile, Some(&viewer), None, None)
        .unwrap());

    let row = db.get_photographer(&profile).unwrap().unwrap();
    assert_eq!(row.views_count, 1);
}

#[test]
fn profile_view_counts_once_per_anonymous_session() {
    let db = Database::open_in_memory().unwrap();
    let (_, profile) = create_photographer(&db, "bob");

    let session = new_id();
    assert!(db
        .record_profile_view(&new_id(), &profile, None, Some(&session), Some("127.0.0.1"))
        .unwrap());
    assert!(!db
        .record_profile_view(&new_id(), &profile, None, Some(&session), Some("127.0.0.1"))
        .unwrap());

    // A different session still counts
    let other = new_id();
    assert!(db
        .record_profile_view(&new_id(), &profile, None, Some(&other), None)
        .unwrap());

    let row = db.get_photographer(&profile).unwrap().unwrap();
    assert_eq!(row.views_count, 2);
}

#[test]
fn deleting_user_cascades_to_dependents() {
    let db = Database::open_in_memory().unwrap();
    let client = create_client(&db, "alice");
    let (photographer_user, profile) = create_photographer(&db, "bob");

    let photo_id = new_id();
    db.insert_photo(&photo_id, &profile, "photos/x.jpg", "wedding").unwrap();
    let booking_id = new_id();
    db.insert_booking(&booking_id, &client, &profile, "Shoot", "+7 (900) 000-00-00")
        .unwrap();
    db.toggle_favorite(&new_id(), &client, &profile).unwrap();
    db.toggle_photo_like(&new_id(), &client, &photo_id).unwrap();

    db.delete_user(&photographer_user).unwrap();

    assert!(db.get_photographer(&profile).unwrap().is_none());
    assert!(db.get_photo(&photo_id, None).unwrap().is_none());
    assert!(db.get_booking(&booking_id).unwrap().is_none());
    assert!(db.list_favorites(&client).unwrap().is_empty());
}

#[test]
fn directory_filters_compose() {
    let db = Database::open_in_memory().unwrap();

    for (name, city, spec, price) in [
        ("anna", "Moscow", "wedding", 3000),
        ("boris", "Moscow", "portrait", 1500),
        ("clara", "Kazan", "wedding", 5000),
    ] {
        let (user_id, profile_id) = create_photographer(&db, name);
        db.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE photographer_profiles SET city = ?2, specialization = ?3, price = ?4
                 WHERE id = ?1",
                rusqlite::params![profile_id, city, spec, price],
            )?;
            Ok(())
        })
        .unwrap();
        let _ = user_id;
    }

    let all = DirectoryFilter::default();
    assert_eq!(db.count_photographers(&all).unwrap(), 3);

    let filter = DirectoryFilter {
        specialization: Some("wedding".into()),
        city: Some("mos".into()),
        ..Default::default()
    };
    let rows = db.list_photographers(&filter, 15, 0).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username, "anna");

    let filter = DirectoryFilter {
        price_min: Some(1000),
        price_max: Some(4000),
        ..Default::default()
    };
    assert_eq!(db.count_photographers(&filter).unwrap(), 2);
}

#[test]
fn city_filter_treats_like_wildcards_literally() {
    let db = Database::open_in_memory().unwrap();

    for (name, city) in [("anna", "Moscow"), ("boris", "50% Studio")] {
        let (_, profile_id) = create_photographer(&db, name);
        db.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE photographer_profiles SET city = ?2 WHERE id = ?1",
                rusqlite::params![profile_id, city],
            )?;
            Ok(())
        })
        .unwrap();
    }

    // "%" is a literal character, not match-everything
    let filter = DirectoryFilter {
        city: Some("%".into()),
        ..Default::default()
    };
    let rows = db.list_photographers(&filter, 15, 0).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username, "boris");

    // Substring matching still works
    let filter = DirectoryFilter {
        city: Some("osc".into()),
        ..Default::default()
    };
    let rows = db.list_photographers(&filter, 15, 0).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username, "anna");
}

#[test]
fn support_request_defaults_subject_and_resolves_on_reply() {
    let db = Database::open_in_memory().unwrap();
    let user = create_client(&db, "alice");

    let ticket_id = new_id();
    db.insert_support_request(&ticket_id, &user, None, "It broke")
        .unwrap();

    let ticket = db.get_support_request(&ticket_id).unwrap().unwrap();
    assert_eq!(ticket.subject, "Support question");
    assert_eq!(ticket.status, "new");
    assert_eq!(db.list_new_support_requests().unwrap().len(), 1);

    db.reply_support_request(&ticket_id, "Fixed now").unwrap();

    let ticket = db.get_support_request(&ticket_id).unwrap().unwrap();
    assert_eq!(ticket.status, "resolved");
    assert_eq!(ticket.admin_response.as_deref(), Some("Fixed now"));
    assert!(db.list_new_support_requests().unwrap().is_empty());
}

#[test]
fn featured_photos_rank_by_recent_likes() {
    let db = Database::open_in_memory().unwrap();
    let (_, profile) = create_photographer(&db, "bob");
    let liker_a = create_client(&db, "alice");
    let liker_b = create_client(&db, "carol");

    let quiet = new_id();
    let popular = new_id();
    db.insert_photo(&quiet, &profile, "photos/a.jpg", "wedding").unwrap();
    db.insert_photo(&popular, &profile, "photos/b.jpg", "portrait").unwrap();

    db.toggle_photo_like(&new_id(), &liker_a, &popular).unwrap();
    db.toggle_photo_like(&new_id(), &liker_b, &popular).unwrap();
    db.toggle_photo_like(&new_id(), &liker_a, &quiet).unwrap();

    let since = (chrono::Utc::now() - chrono::Duration::days(7))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    let featured = db.list_featured_photos(None, &since, 6).unwrap();
    assert_eq!(featured.len(), 2);
    assert_eq!(featured[0].id, popular);

    // Nothing liked in the window -> empty, caller falls back to random
    let future = (chrono::Utc::now() + chrono::Duration::days(1))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    assert!(db.list_featured_photos(None, &future, 6).unwrap().is_empty());
    assert_eq!(db.list_random_photos(None, 6).unwrap().len(), 2);
}
