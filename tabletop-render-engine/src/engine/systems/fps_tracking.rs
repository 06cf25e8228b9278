use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::core::app_state::FpsText;
use constants::overlay::{FPS_LABEL, FPS_MARGIN_PX, FPS_TEXT_COLOR, FPS_TEXT_SIZE};

/// Spawn the FPS readout in the top-left corner of the viewport.
pub fn create_fps_overlay(commands: &mut Commands) {
    commands.spawn((
        Text::new(FPS_LABEL),
        TextFont {
            font_size: FPS_TEXT_SIZE,
            ..default()
        },
        TextColor(FPS_TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(FPS_MARGIN_PX),
            left: Val::Px(FPS_MARGIN_PX),
            ..default()
        },
        FpsText,
    ));
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    let Some(fps) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|diagnostic| diagnostic.smoothed())
    else {
        return;
    };

    for mut text in &mut query {
        text.0 = format!("{FPS_LABEL}{fps:.1}");
    }
}
