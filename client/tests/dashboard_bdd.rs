//! Behavioural tests for the dashboard view models.

use std::sync::Mutex;

use handreceipt::domain::{Activity, Error, ErrorCode};
use handreceipt::test_support::{
    sample_activities, sample_inventory, sample_notifications, sample_transfers,
};
use handreceipt::views::{
    ActivityFeed, FeedBody, InventoryView, MyInventory, NotificationPanel, NotificationTab, PendingTransfersBoard,
    PendingView, Route, Toast,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct DashboardWorld {
    activities: Vec<Activity>,
    feed: Option<ActivityFeed>,
    board: PendingTransfersBoard,
    panel: NotificationPanel,
    inventory: MyInventory,
    last_toast: Option<Toast>,
    last_error: Option<Error>,
}

impl DashboardWorld {
    fn feed(&self) -> &ActivityFeed {
        self.feed.as_ref().expect("feed should be rendered")
    }

    fn decide(&mut self, outcome: Result<Toast, Error>) {
        match outcome {
            Ok(toast) => {
                self.last_toast = Some(toast);
                self.last_error = None;
            }
            Err(err) => {
                self.last_toast = None;
                self.last_error = Some(err);
            }
        }
    }
}

fn count(raw: &str) -> usize {
    raw.parse().expect("scenario count is a number")
}

fn tab(name: &str) -> NotificationTab {
    match name {
        "all" => NotificationTab::All,
        "transfers" => NotificationTab::Transfers,
        "system" => NotificationTab::System,
        other => panic!("unknown tab {other}"),
    }
}

#[fixture]
fn world() -> Mutex<DashboardWorld> {
    Mutex::new(DashboardWorld::default())
}

#[given("the sample activity log")]
fn the_sample_activity_log(world: &Mutex<DashboardWorld>) {
    world.lock().expect("world lock").activities = sample_activities();
}

#[given("an empty activity log")]
fn an_empty_activity_log(world: &Mutex<DashboardWorld>) {
    world.lock().expect("world lock").activities.clear();
}

#[given("the sample transfers")]
fn the_sample_transfers(world: &Mutex<DashboardWorld>) {
    world.lock().expect("world lock").board = PendingTransfersBoard::new(sample_transfers());
}

#[given("the sample notifications")]
fn the_sample_notifications(world: &Mutex<DashboardWorld>) {
    world.lock().expect("world lock").panel = NotificationPanel::new(sample_notifications());
}

#[when("the activity feed is rendered")]
fn the_activity_feed_is_rendered(world: &Mutex<DashboardWorld>) {
    let mut world = world.lock().expect("world lock");
    let feed = ActivityFeed::from_activities(&world.activities);
    world.feed = Some(feed);
}

#[when("transfer {id} is approved")]
fn transfer_is_approved(world: &Mutex<DashboardWorld>, id: String) {
    let mut world = world.lock().expect("world lock");
    let outcome = world.board.approve(&id);
    world.decide(outcome);
}

#[when("transfer {id} is rejected")]
fn transfer_is_rejected(world: &Mutex<DashboardWorld>, id: String) {
    let mut world = world.lock().expect("world lock");
    let outcome = world.board.reject(&id);
    world.decide(outcome);
}

#[when("every notification is marked read")]
fn every_notification_is_marked_read(world: &Mutex<DashboardWorld>) {
    world.lock().expect("world lock").panel.mark_all_read();
}

#[then("the feed shows {rows} rows")]
fn the_feed_shows_rows(world: &Mutex<DashboardWorld>, rows: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.feed().rows().len(), count(&rows));
}

#[then("row {index} carries the verified badge")]
fn row_is_verified(world: &Mutex<DashboardWorld>, index: String) {
    let world = world.lock().expect("world lock");
    let row = &world.feed().rows()[count(&index) - 1];
    assert!(row.verified, "row {} should be verified", row.id);
}

#[then("row {index} has no verified badge")]
fn row_is_not_verified(world: &Mutex<DashboardWorld>, index: String) {
    let world = world.lock().expect("world lock");
    let row = &world.feed().rows()[count(&index) - 1];
    assert!(!row.verified, "row {} should not be verified", row.id);
}

#[then("the feed links to {path}")]
fn the_feed_links_to(world: &Mutex<DashboardWorld>, path: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(Some(world.feed().view_all), Route::from_path(&path));
}

#[then("the feed shows the placeholder {message}")]
fn the_feed_shows_the_placeholder(world: &Mutex<DashboardWorld>, message: String) {
    let world = world.lock().expect("world lock");
    match &world.feed().body {
        FeedBody::Empty { message: shown } => assert_eq!(*shown, message),
        FeedBody::Rows(rows) => panic!("expected the placeholder, got {} rows", rows.len()),
    }
}

#[then("the board lists {pending} pending transfers")]
fn the_board_lists_pending_transfers(world: &Mutex<DashboardWorld>, pending: String) {
    let world = world.lock().expect("world lock");
    match world.board.view() {
        PendingView::Rows(rows) => assert_eq!(rows.len(), count(&pending)),
        PendingView::Empty(text) => panic!("expected rows, got placeholder {text}"),
    }
}

#[then("the toast reads {title}")]
fn the_toast_reads(world: &Mutex<DashboardWorld>, title: String) {
    let world = world.lock().expect("world lock");
    let toast = world.last_toast.as_ref().expect("a toast should be shown");
    assert_eq!(toast.title, title);
}

#[then("the board shows the placeholder {message}")]
fn the_board_shows_the_placeholder(world: &Mutex<DashboardWorld>, message: String) {
    let world = world.lock().expect("world lock");
    match world.board.view() {
        PendingView::Empty(shown) => assert_eq!(shown, message),
        PendingView::Rows(rows) => panic!("expected the placeholder, got {} rows", rows.len()),
    }
}

#[then("the decision is refused as an invalid request")]
fn the_decision_is_refused(world: &Mutex<DashboardWorld>) {
    let world = world.lock().expect("world lock");
    let err = world.last_error.as_ref().expect("decision should fail");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[then("the {name} tab lists {listed} notifications")]
fn the_tab_lists_notifications(world: &Mutex<DashboardWorld>, name: String, listed: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.panel.tab(tab(&name)).len(), count(&listed));
}

#[then("the dashboard preview lists {listed} notifications")]
fn the_dashboard_preview_lists(world: &Mutex<DashboardWorld>, listed: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.panel.dashboard_preview().len(), count(&listed));
}

#[then("{unread} notifications are unread")]
fn notifications_are_unread(world: &Mutex<DashboardWorld>, unread: String) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.panel.unread_count(), count(&unread));
}

#[given("the sample inventory")]
fn the_sample_inventory(world: &Mutex<DashboardWorld>) {
    world.lock().expect("world lock").inventory = MyInventory::new(sample_inventory());
}

#[when("the inventory is searched for {term}")]
fn the_inventory_is_searched_for(world: &Mutex<DashboardWorld>, term: String) {
    world.lock().expect("world lock").inventory.set_search(term);
}

#[when("a transfer is requested for {id}")]
fn a_transfer_is_requested_for(world: &Mutex<DashboardWorld>, id: String) {
    let mut world = world.lock().expect("world lock");
    let outcome = world.inventory.request_transfer(&id);
    world.decide(outcome);
}

#[then("the inventory lists {id}")]
fn the_inventory_lists(world: &Mutex<DashboardWorld>, id: String) {
    let world = world.lock().expect("world lock");
    let listed: Vec<&str> = world
        .inventory
        .matching()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(listed, vec![id.as_str()]);
}

#[then("row {id} reads {serial_line}")]
fn row_reads(world: &Mutex<DashboardWorld>, id: String, serial_line: String) {
    let world = world.lock().expect("world lock");
    let InventoryView::Rows(rows) = world.inventory.view() else {
        panic!("expected inventory rows");
    };
    let row = rows
        .iter()
        .find(|row| row.id == id)
        .expect("row should be listed");
    assert_eq!(row.serial_line, serial_line);
}

#[then("the inventory shows the placeholder {message}")]
fn the_inventory_shows_the_placeholder(world: &Mutex<DashboardWorld>, message: String) {
    let world = world.lock().expect("world lock");
    match world.inventory.view() {
        InventoryView::Empty(shown) => assert_eq!(shown, message),
        InventoryView::Rows(rows) => panic!("expected the placeholder, got {} rows", rows.len()),
    }
}

#[then("the toast description is {description}")]
fn the_toast_description_is(world: &Mutex<DashboardWorld>, description: String) {
    let world = world.lock().expect("world lock");
    let toast = world.last_toast.as_ref().expect("a toast should be shown");
    assert_eq!(toast.description, description);
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "The feed shows the newest four activities"
)]
fn the_feed_shows_the_newest_four_activities(world: Mutex<DashboardWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "An empty log shows the placeholder"
)]
fn an_empty_log_shows_the_placeholder(world: Mutex<DashboardWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "Deciding every pending transfer empties the board"
)]
fn deciding_every_pending_transfer_empties_the_board(world: Mutex<DashboardWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "Deciding an unknown transfer is refused"
)]
fn deciding_an_unknown_transfer_is_refused(world: Mutex<DashboardWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "Notification tabs split transfer requests from the rest"
)]
fn notification_tabs_split_transfer_requests_from_the_rest(world: Mutex<DashboardWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "Marking everything read clears the unread count"
)]
fn marking_everything_read_clears_the_unread_count(world: Mutex<DashboardWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "Inventory search matches serial numbers without regard to case"
)]
fn inventory_search_matches_serial_numbers_without_regard_to_case(world: Mutex<DashboardWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "Inventory search matches item names"
)]
fn inventory_search_matches_item_names(world: Mutex<DashboardWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "An inventory search without matches shows the placeholder"
)]
fn an_inventory_search_without_matches_shows_the_placeholder(world: Mutex<DashboardWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "Requesting a transfer from the inventory names the item"
)]
fn requesting_a_transfer_from_the_inventory_names_the_item(world: Mutex<DashboardWorld>) {
    drop(world);
}
