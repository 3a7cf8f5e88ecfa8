use log::info;
use user_table_business::{LoadUsersCommand, Route};

use crate::{
    pages,
    state::{State, mount_ctx},
    widgets::{self, UserTableEvent},
};

pub struct UserTableApp {
    pub state: State,
}

impl UserTableApp {
    /// Called once before the first frame. Mounting the user table starts its fetch.
    pub fn new(state: State) -> Self {
        let mut app = Self { state };
        if app.state.route == Route::Users {
            app.state.ctx.dispatch::<LoadUsersCommand>();
        }
        app
    }

    /// Drops the mounted table (cancelling any in-flight fetch) and mounts a fresh one.
    pub fn remount(&mut self) {
        info!("remounting {}", self.state.route.path());
        self.state.ctx = mount_ctx(self.state.config.clone());
        if self.state.route == Route::Users {
            self.state.ctx.dispatch::<LoadUsersCommand>();
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.state.route = route;
        self.remount();
    }
}

impl eframe::App for UserTableApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply fetch results, then settle derived state before rendering
        self.state.ctx.sync_computes();
        self.state.ctx.run_computed();

        let mut event = None;
        let mut go_to = None;

        egui::CentralPanel::default().show(ctx, |ui| match &self.state.route {
            Route::Users => {
                ui.heading("Users");
                ui.add_space(8.0);
                event = widgets::user_table(&mut self.state.ctx, ui);
            }
            Route::NotFound(path) => {
                if pages::not_found_page(ui, path) {
                    go_to = Some(Route::Users);
                }
            }
        });

        if let Some(route) = go_to {
            self.navigate(route);
        }
        if let Some(UserTableEvent::Retry) = event {
            self.remount();
        }

        // Re-derive whatever this frame's input changed
        self.state.ctx.run_computed();
    }
}
