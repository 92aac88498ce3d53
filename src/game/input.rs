use crate::entities::DirectionSet;

/// UI buttons the simulation reacts to. Which one a click lands on depends
/// on the active screen; see `ui::control_at`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Start,
    Pause,
    Resume,
    PlayAgain,
}

/// Everything the simulation consumes from one frame of real input.
/// `held` is level-triggered; `fire` and `reload` are edge-triggered
/// (true only on the frame the key went down).
#[derive(Clone, Copy, Debug, Default)]
pub struct InputSnapshot {
    pub held: DirectionSet,
    pub fire: bool,
    pub reload: bool,
    pub clicked: Option<Control>,
}
