use muncher::camera::CameraMode;
use muncher::events::{GameCommand, GameEvent};
use pretty_assertions::assert_eq;

#[test]
fn test_game_command_equality() {
    assert_eq!(GameCommand::Begin, GameCommand::Begin);
    assert_eq!(
        GameCommand::SetCameraMode(CameraMode::TopDown),
        GameCommand::SetCameraMode(CameraMode::TopDown)
    );
    assert_ne!(GameCommand::Begin, GameCommand::TogglePause);
    assert_ne!(
        GameCommand::SetCameraMode(CameraMode::FirstPerson),
        GameCommand::SetCameraMode(CameraMode::TopDown)
    );
}

#[test]
fn test_game_command_to_game_event_conversion() {
    let commands = [
        GameCommand::Begin,
        GameCommand::TogglePause,
        GameCommand::SetCameraMode(CameraMode::FirstPerson),
        GameCommand::SetCameraMode(CameraMode::TopDown),
        GameCommand::SetCameraMode(CameraMode::ThirdPersonChase),
        GameCommand::ToggleMute,
        GameCommand::Exit,
    ];

    for command in commands {
        let event: GameEvent = command.into();
        assert_eq!(event, GameEvent::Command(command));
    }
}

#[test]
fn test_game_event_debug_format() {
    let event = GameEvent::Command(GameCommand::SetCameraMode(CameraMode::TopDown));
    let debug_str = format!("{:?}", event);
    assert!(debug_str.contains("Command"));
    assert!(debug_str.contains("TopDown"));
}
