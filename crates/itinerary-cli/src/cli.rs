//! Command handlers: open the right session, run the operation, render the
//! result.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use itinerary_core::{
    display::{CreateResult, DeleteResult, Items, OperationStatus, Schedules, UpdateResult},
    maplink::MapOpener,
    params::{MoveItem, SwapItems},
    Direction, ExportFile, FileStore, KeyValueStore, PoolSession, SaveStatus, SessionBuilder,
    TripSession,
};
use log::debug;
use url::Url;

use crate::{
    args::{
        DayCommands, EventCommands, ExportArgs, ItemCommands, PoolCommands, PoolDayCommands,
        TripCommands, UpdateItemArgs,
    },
    renderer::TerminalRenderer,
};

/// Shows a map link by printing it; the terminal or the user opens it.
struct PrintOpener<'a> {
    renderer: &'a TerminalRenderer,
}

impl MapOpener for PrintOpener<'_> {
    fn open(&self, url: &Url) {
        if let Err(e) = self.renderer.render(&format!("{url}\n")) {
            debug!("Could not print map link: {e}");
        }
    }
}

pub struct Cli {
    builder: SessionBuilder,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(builder: SessionBuilder, renderer: TerminalRenderer) -> Self {
        Self { builder, renderer }
    }

    fn open_trip(&self) -> Result<TripSession<FileStore>> {
        self.builder
            .clone()
            .open_trip()
            .context("Failed to open the trip")
    }

    fn open_pool(&self) -> Result<PoolSession<FileStore>> {
        self.builder
            .clone()
            .open_pool()
            .context("Failed to open the event pool")
    }

    pub fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        let mut session = self.open_trip()?;

        match command {
            TripCommands::Show => return self.show_trip(&session),
            TripCommands::Rename { name } => {
                session.rename(&name)?;
                self.success(&format!("Renamed trip to '{}'", session.trip().name))?;
            }
            TripCommands::Dates { label } => {
                session.set_date_range(&label)?;
                self.success("Updated trip dates")?;
            }
            TripCommands::Reset => {
                let days = session.reset().days.len();
                self.success(&format!("Reset trip to {days} empty days"))?;
            }
            TripCommands::Export(args) => {
                let file = session.export()?;
                return self.write_export(&file, &args);
            }
        }

        self.report_save(session.last_save())
    }

    pub fn handle_day_command(&self, command: DayCommands) -> Result<()> {
        let mut session = self.open_trip()?;

        match command {
            DayCommands::Add(args) => {
                let day = session.add_day(&args.into())?;
                self.renderer.render(&CreateResult::new(day).to_string())?;
            }
        }

        self.report_save(session.last_save())
    }

    pub fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        let mut session = self.open_trip()?;

        match command {
            ItemCommands::Add(args) => {
                let item = session.add_item(&args.into())?;
                self.renderer.render(&CreateResult::new(item).to_string())?;
            }
            ItemCommands::Update(args) => {
                let changes = item_changes(&args);
                let item = session.update_item(&args.into())?;
                self.renderer
                    .render(&UpdateResult::with_changes(item, changes).to_string())?;
            }
            ItemCommands::Delete(args) => {
                let item = session.delete_item(&args.into())?;
                self.renderer.render(&DeleteResult::new(item).to_string())?;
            }
            ItemCommands::Swap(args) => {
                let params: SwapItems = args.into();
                session.swap_items(&params)?;
                self.show_day_of(&session, &params.first_id)?;
            }
            ItemCommands::Up(args) => {
                return self.move_item(&mut session, &args.moved(Direction::Up));
            }
            ItemCommands::Down(args) => {
                return self.move_item(&mut session, &args.moved(Direction::Down));
            }
            ItemCommands::Map(args) => {
                let shown = session.open_item_map(&args.id, &self.opener())?;
                return self.report_map(shown, "Item has no location");
            }
        }

        self.report_save(session.last_save())
    }

    pub fn handle_pool_command(&self, command: PoolCommands) -> Result<()> {
        let mut session = self.open_pool()?;

        match command {
            PoolCommands::Show => return self.show_pool(&session),
            PoolCommands::Day {
                command: PoolDayCommands::Add(args),
            } => {
                let day = session.add_day(&args.into())?;
                self.renderer.render(&CreateResult::new(day).to_string())?;
            }
            PoolCommands::Reset => {
                session.reset();
                self.success(&format!("Reset to {} empty days", session.days().len()))?;
            }
            PoolCommands::Export(args) => {
                let file = session.export()?;
                return self.write_export(&file, &args);
            }
        }

        self.report_save(session.last_save())
    }

    pub fn handle_event_command(&self, command: EventCommands) -> Result<()> {
        let mut session = self.open_pool()?;

        match command {
            EventCommands::Add(args) => {
                let event = session.add_event(&args.into())?;
                self.renderer.render(&CreateResult::new(event).to_string())?;
            }
            EventCommands::Update(args) => {
                let event = session.update_event(&args.into())?;
                self.renderer.render(&UpdateResult::new(event).to_string())?;
            }
            EventCommands::Delete(args) => {
                let event = session.delete_event(&args.into())?;
                self.renderer.render(&DeleteResult::new(event).to_string())?;
            }
            EventCommands::Move(args) => {
                let event = session.move_event(&args.into())?;
                let change = format!("Moved to {}", event.date());
                self.renderer
                    .render(&UpdateResult::with_changes(event, vec![change]).to_string())?;
            }
            EventCommands::Map(args) => {
                let shown = session.open_event_map(&args.id, &self.opener())?;
                return self.report_map(shown, "Event has no location");
            }
        }

        self.report_save(session.last_save())
    }

    fn show_trip<S: KeyValueStore>(&self, session: &TripSession<S>) -> Result<()> {
        self.renderer.render(&session.trip().to_string())
    }

    fn show_pool<S: KeyValueStore>(&self, session: &PoolSession<S>) -> Result<()> {
        self.renderer.render(&Schedules(session.schedules()).to_string())
    }

    fn show_day_of<S: KeyValueStore>(&self, session: &TripSession<S>, item_id: &str) -> Result<()> {
        let Some(day) = session.trip().day_of_item(item_id) else {
            return Ok(());
        };
        self.renderer
            .render(&format!("## {}\n\n{}", day.label, Items(day.ordered_items())))
    }

    fn move_item(&self, session: &mut TripSession<FileStore>, params: &MoveItem) -> Result<()> {
        if session.move_item(params)? {
            self.show_day_of(session, &params.id)?;
            self.report_save(session.last_save())
        } else {
            self.success("Item is already at that end of its day")
        }
    }

    fn opener(&self) -> PrintOpener<'_> {
        PrintOpener {
            renderer: &self.renderer,
        }
    }

    fn report_map(&self, shown: bool, missing: &str) -> Result<()> {
        if shown {
            Ok(())
        } else {
            self.failure(missing)
        }
    }

    fn write_export(&self, file: &ExportFile, args: &ExportArgs) -> Result<()> {
        let path = args.out.join(&file.file_name);
        write_file(&path, &file.contents)?;
        self.success(&format!("Exported to {}", path.display()))
    }

    /// Warns when the last write did not reach the store.
    fn report_save(&self, status: &SaveStatus) -> Result<()> {
        match OperationStatus::from_save(status) {
            Some(warning) => self.renderer.render(&warning.to_string()),
            None => Ok(()),
        }
    }

    fn success(&self, message: &str) -> Result<()> {
        self.renderer
            .render(&OperationStatus::success(message.to_string()).to_string())
    }

    fn failure(&self, message: &str) -> Result<()> {
        self.renderer
            .render(&OperationStatus::failure(message.to_string()).to_string())
    }
}

fn item_changes(args: &UpdateItemArgs) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(title) = &args.title {
        changes.push(format!("Title: {title}"));
    }
    if let Some(time) = &args.time {
        changes.push(format!("Time: {time}"));
    }
    if args.location.is_some() {
        changes.push("Location updated".to_string());
    }
    if args.note.is_some() {
        changes.push("Note updated".to_string());
    }
    changes
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
