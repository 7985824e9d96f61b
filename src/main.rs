use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_motor::content::ContentLoaded;
use platformer_motor::movement::{bootstrap, dev};
use platformer_motor::{ContentPlugin, MovementPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer Motor Sandbox".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((ContentPlugin, MovementPlugin))
        .add_systems(
            Startup,
            (
                dev::spawn_camera,
                dev::spawn_test_room,
                bootstrap::bootstrap_player.after(ContentLoaded),
            ),
        )
        .run();
}
