//! Prism - event loop wiring keyboard input to the tone bank

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use prism_dsp::io::AudioOutput;
use prism_dsp::{Keyboard, SampleBuffer};

use super::ui::{self, View};

/// How much of a synthesized signal the waveform view shows.
const WAVEFORM_WINDOW: usize = 4096;
/// Points handed to the chart widget.
const WAVEFORM_POINTS: usize = 512;

/// Terminal piano application.
pub struct Prism {
    keyboard: Keyboard,
    output: AudioOutput,
    level: u32,
    key_map: Vec<(char, String)>,
    last_tone: Option<String>,
    waveform: Vec<f32>,
    should_quit: bool,
}

impl Prism {
    pub fn new(keyboard: Keyboard) -> EyreResult<Self> {
        let output = AudioOutput::new()?;
        Ok(Self {
            keyboard,
            output,
            level: 4,
            key_map: Vec::new(),
            last_tone: None,
            waveform: Vec::new(),
            should_quit: false,
        })
    }

    /// Starting octave level for the key row.
    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Take over the terminal until Esc is pressed.
    pub fn run(mut self) -> EyreResult<()> {
        self.key_map = self.keyboard.key_map(self.level);

        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        result
    }

    fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            let view = View {
                key_map: &self.key_map,
                last_tone: self.last_tone.as_deref(),
                waveform: &self.waveform,
                volume: self.keyboard.volume(),
                level: self.level,
            };
            terminal.draw(|frame| ui::render(frame, &view))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> EyreResult<()> {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.output.stop(),
            KeyCode::Char(pressed) => {
                let Some((_, tone)) = self.key_map.iter().find(|(key, _)| *key == pressed) else {
                    return Ok(());
                };
                let tone = tone.clone();

                let signal = self.keyboard.synth(&[tone.as_str()])?;
                self.output.play(&signal, self.keyboard.config(), false)?;

                self.waveform = downsample(&signal);
                self.last_tone = Some(tone);
            }
            _ => {}
        }
        Ok(())
    }
}

/// Thin the leading window of a signal down to chart resolution.
fn downsample(signal: &SampleBuffer) -> Vec<f32> {
    let window = &signal.as_slice()[..signal.len().min(WAVEFORM_WINDOW)];
    let stride = (window.len() / WAVEFORM_POINTS).max(1);
    window.iter().step_by(stride).copied().collect()
}
