// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use courier_adapters::{WorldDocument, WorldFileBridge};
use courier_core::{ItemId, ItemStack, Request};
use tempfile::TempDir;

/// A project on a file bridge with daemon files under a private state dir
pub(crate) struct TestDaemon {
    pub root: TempDir,
    _state: TempDir,
    pub paths: DaemonPaths,
}

impl TestDaemon {
    pub(crate) fn new(world: &WorldDocument) -> Self {
        let root = TempDir::new().unwrap();
        let state = TempDir::new().unwrap();
        std::fs::write(
            root.path().join("courier.toml"),
            "[scan]\non_startup = false\n\n[display]\nkind = \"none\"\n\n[bridge]\nkind = \"file\"\n",
        )
        .unwrap();
        WorldFileBridge::create(root.path().join("world.json"), world).unwrap();

        let state_dir = state.path().join("projects").join("test");
        let paths = DaemonPaths {
            project_root: root.path().to_path_buf(),
            socket_path: state.path().join("d.sock"),
            lock_path: state_dir.join("daemon.pid"),
            version_path: state_dir.join("daemon.version"),
            log_path: state_dir.join("daemon.log"),
        };
        Self {
            root,
            _state: state,
            paths,
        }
    }

    pub(crate) fn world(&self) -> WorldDocument {
        WorldFileBridge::open(self.root.path().join("world.json"))
            .unwrap()
            .document()
            .unwrap()
    }
}

pub(crate) fn stocked_world() -> WorldDocument {
    WorldDocument {
        requests: vec![Request {
            display_name: "Cobblestone".to_string(),
            description: String::new(),
            needed: 16,
            target: "Builder's Hut".to_string(),
            item_id: Some(ItemId::new("minecraft:cobblestone")),
        }],
        items: vec![ItemStack::new("minecraft:cobblestone", 64)],
        ..WorldDocument::default()
    }
}

#[tokio::test]
async fn startup_writes_daemon_files_and_binds() {
    let project = TestDaemon::new(&stocked_world());
    let mut daemon = startup(&project.paths).await.unwrap();

    assert!(project.paths.socket_path.exists());
    let pid = std::fs::read_to_string(&project.paths.lock_path).unwrap();
    assert_eq!(pid.trim(), std::process::id().to_string());
    assert_eq!(
        std::fs::read_to_string(&project.paths.version_path).unwrap(),
        env!("CARGO_PKG_VERSION")
    );
    assert!(!daemon.scan_on_startup);

    daemon.shutdown().await.unwrap();
    assert!(!project.paths.socket_path.exists());
    assert!(!project.paths.lock_path.exists());
    assert!(!project.paths.version_path.exists());
}

#[tokio::test]
async fn second_startup_fails_on_lock_and_leaves_files() {
    let project = TestDaemon::new(&stocked_world());
    let _first = startup(&project.paths).await.unwrap();

    let err = startup(&project.paths).await.err().unwrap();
    assert!(matches!(err, LifecycleError::LockFailed(_)));

    // The running daemon's files are untouched
    let pid = std::fs::read_to_string(&project.paths.lock_path).unwrap();
    assert_eq!(pid.trim(), std::process::id().to_string());
    assert!(project.paths.socket_path.exists());
    assert!(project.paths.version_path.exists());
}

#[tokio::test]
async fn unreachable_bridge_fails_before_binding() {
    let project = TestDaemon::new(&stocked_world());
    std::fs::remove_file(project.root.path().join("world.json")).unwrap();

    let err = startup(&project.paths).await.err().unwrap();
    assert!(matches!(err, LifecycleError::Bridge(_)));
    assert!(!project.paths.socket_path.exists());
    assert!(!project.paths.lock_path.exists());
    assert!(!project.paths.version_path.exists());
}

#[tokio::test]
async fn invalid_config_is_fatal() {
    let project = TestDaemon::new(&stocked_world());
    std::fs::write(
        project.root.path().join("courier.toml"),
        "[night]\nstart_hour = 30.0\n",
    )
    .unwrap();

    let err = startup(&project.paths).await.err().unwrap();
    assert!(matches!(err, LifecycleError::Config(_)));
    assert!(!project.paths.socket_path.exists());
}

#[tokio::test]
async fn startup_scan_delivers_and_keeps_report() {
    let project = TestDaemon::new(&stocked_world());
    let mut daemon = startup(&project.paths).await.unwrap();

    daemon.startup_scan().await;

    assert_eq!(daemon.runtime.scans(), 1);
    let summary = daemon.runtime.last_summary().unwrap();
    assert_eq!(summary.trigger, ScanTrigger::Startup);
    assert_eq!(summary.counts.fulfilled, 1);
    assert_eq!(
        project.world().delivered[&ItemId::new("minecraft:cobblestone")],
        16
    );
}

#[tokio::test]
async fn manual_scan_rearms_timer() {
    let project = TestDaemon::new(&stocked_world());
    let mut daemon = startup(&project.paths).await.unwrap();
    let before = daemon.next_tick;

    tokio::time::sleep(Duration::from_millis(5)).await;
    let summary = daemon.manual_scan().await.unwrap();

    assert_eq!(summary.trigger, ScanTrigger::Manual);
    assert!(daemon.next_tick > before);
}

#[tokio::test]
async fn failed_timer_scan_keeps_running() {
    let project = TestDaemon::new(&stocked_world());
    let mut daemon = startup(&project.paths).await.unwrap();
    std::fs::write(project.root.path().join("world.json"), "not json").unwrap();

    // Default interval is many ticks; force the scan through the manual path
    let err = daemon.manual_scan().await.err().unwrap();
    assert!(matches!(err, LifecycleError::Engine(_)));

    daemon.on_tick().await;
    assert_eq!(daemon.runtime.scans(), 0);
    assert!(!daemon.shutdown_requested);
}
