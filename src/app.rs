//! Main loop: read input, apply it to the controller, redraw.

use anyhow::{Context, Result};
use ratatui::layout::Rect;

use tbrowse_core::{FileSystem, NavigationController, Renderer, Transition};
use tbrowse_keyboard::action_for_key;
use tbrowse_ui::{entry_rows, Event};

pub struct App<F, R> {
    controller: NavigationController<F>,
    renderer: R,
}

impl<F, R> App<F, R>
where
    F: FileSystem,
    R: Renderer<Error = anyhow::Error>,
{
    pub fn new(controller: NavigationController<F>, renderer: R) -> Self {
        Self {
            controller,
            renderer,
        }
    }

    pub fn controller(&self) -> &NavigationController<F> {
        &self.controller
    }

    /// Draw the current state.
    pub fn draw(&mut self) -> Result<()> {
        let view = self.controller.view();
        self.renderer.render(&view).context("Failed to draw the browser")
    }

    /// Apply one input event.
    pub fn handle_event(&mut self, event: Event) -> Result<Transition> {
        match event {
            Event::Key(key) => match action_for_key(key) {
                Some(action) => {
                    log::debug!("Key {:?} -> {:?}", key.code, action);
                    self.controller
                        .handle(action)
                        .context("Failed to apply navigation action")
                }
                None => Ok(Transition::Continue),
            },
            Event::Resize(width, height) => {
                self.controller
                    .resize(entry_rows(Rect::new(0, 0, width, height)));
                Ok(Transition::Continue)
            }
        }
    }

    /// Run until the user quits.
    pub fn run(&mut self, mut next_event: impl FnMut() -> Result<Event>) -> Result<()> {
        loop {
            self.draw()?;
            let event = next_event()?;
            if self.handle_event(event)? == Transition::Quit {
                log::info!("Quit requested");
                return Ok(());
            }
        }
    }
}
