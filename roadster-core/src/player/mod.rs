pub mod choices;
pub mod player_inputs;
