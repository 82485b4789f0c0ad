//! # Session Controller
//!
//! Greets the user, then loops over the main menu until they quit. Each menu
//! entry runs one action through [`WarehouseApi`] and renders its result; every
//! prompt re-asks on invalid input. When input ends, the session is closed as if
//! the user had chosen to quit.

use super::console::Console;
use super::render::{
    write_categories, write_category_items, write_matches, write_messages, write_summary,
    write_warehouses,
};
use chrono::Local;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::{debug, warn};
use warehouse::api::{confirmation, CmdMessage, OrderState, QuantityOutcome, WarehouseApi};
use warehouse::error::{Result, WarehouseError};
use warehouse::model::ItemQuery;
use warehouse::session::SessionLog;
use warehouse::store::DataStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListByWarehouse,
    SearchAndOrder,
    BrowseByCategory,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::ListByWarehouse,
        MenuChoice::SearchAndOrder,
        MenuChoice::BrowseByCategory,
        MenuChoice::Quit,
    ];

    pub fn from_number(n: i64) -> Option<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ListByWarehouse => "List items by warehouse",
            MenuChoice::SearchAndOrder => "Search an item and place an order",
            MenuChoice::BrowseByCategory => "Browse by category",
            MenuChoice::Quit => "Quit",
        }
    }
}

pub struct Repl<S: DataStore, R, W> {
    api: WarehouseApi<S>,
    console: Console<R, W>,
    session: SessionLog,
    user: String,
}

impl<S: DataStore, R: BufRead, W: Write> Repl<S, R, W> {
    pub fn new(api: WarehouseApi<S>, console: Console<R, W>) -> Self {
        Self {
            api,
            console,
            session: SessionLog::new(),
            user: String::new(),
        }
    }

    /// Runs the session until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        match self.interact() {
            Ok(()) => {}
            Err(WarehouseError::InputClosed) => warn!("input closed, ending session"),
            Err(e) => return Err(e),
        }
        self.quit()
    }

    #[cfg(test)]
    pub fn session(&self) -> &SessionLog {
        &self.session
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    fn interact(&mut self) -> Result<()> {
        self.welcome()?;
        loop {
            let choice = self.choose()?;
            debug!(?choice, "menu choice");
            match choice {
                MenuChoice::ListByWarehouse => self.list_by_warehouse()?,
                MenuChoice::SearchAndOrder => self.search_and_order()?,
                MenuChoice::BrowseByCategory => self.browse_by_category()?,
                MenuChoice::Quit => return Ok(()),
            }
        }
    }

    fn welcome(&mut self) -> Result<()> {
        let name = self.console.ask("What is your name?")?;
        self.user = match name.trim() {
            "" => "guest".to_string(),
            name => name.to_string(),
        };
        let greeting = format!("Hello {}. Welcome to our warehouse", self.user);
        self.console.say(greeting.bold())
    }

    fn choose(&mut self) -> Result<MenuChoice> {
        loop {
            self.console.say("")?;
            self.console.say("What would you like to do?")?;
            for (i, choice) in MenuChoice::ALL.iter().enumerate() {
                self.console.say(format!("{}. {}", i + 1, choice.label()))?;
            }
            self.console.say("Type the number of the operation:")?;

            match self.console.read_number()?.and_then(MenuChoice::from_number) {
                Some(choice) => return Ok(choice),
                None => self.notify(CmdMessage::error("Please enter a valid number."))?,
            }
        }
    }

    fn list_by_warehouse(&mut self) -> Result<()> {
        let result = self.api.list_by_warehouse(&mut self.session)?;
        let out = self.console.output();
        write_warehouses(out, &result.warehouses)?;
        write_messages(out, &result.messages)?;
        Ok(())
    }

    fn search_and_order(&mut self) -> Result<()> {
        let query = loop {
            let raw = self.console.ask("Please enter an item name:")?;
            match ItemQuery::new(&raw) {
                Ok(query) => break query,
                Err(_) => self.notify(CmdMessage::error("The item name cannot be empty."))?,
            }
        };

        let result = self
            .api
            .search(query.as_str(), Local::now(), &mut self.session)?;
        let out = self.console.output();
        if let Some(availability) = &result.availability {
            write_matches(out, &availability.matches)?;
        }
        write_messages(out, &result.messages)?;

        match result.availability {
            Some(availability) if availability.in_stock() => {
                self.place_order(&query, availability.total)
            }
            _ => Ok(()),
        }
    }

    fn place_order(&mut self, query: &ItemQuery, available: usize) -> Result<()> {
        let mut flow = self.api.start_order(available)?;
        loop {
            match flow.state() {
                OrderState::Offer => {
                    let yes = self
                        .console
                        .confirm("Would you like to order the searched item?")?;
                    flow.answer(yes)?;
                }
                OrderState::AskQuantity => {
                    self.console
                        .say("How many of the item do you want to order?")?;
                    let Some(quantity) = self.console.read_number()? else {
                        self.notify(CmdMessage::error("Please enter a whole number."))?;
                        continue;
                    };
                    match flow.submit_quantity(quantity)? {
                        QuantityOutcome::Accepted(_) => {}
                        QuantityOutcome::NotPositive => self.notify(CmdMessage::error(
                            "Sorry !! the amount is not valid, please enter a value more than 0",
                        ))?,
                        QuantityOutcome::ExceedsAvailable { available } => {
                            self.notify(CmdMessage::warning(format!(
                                "The desired amount is higher than the total available. \
                                 The maximum amount is: {}",
                                available
                            )))?;
                        }
                    }
                }
                OrderState::ConfirmMax => {
                    let yes = self
                        .console
                        .confirm("Would you like to order the maximum available?")?;
                    flow.answer(yes)?;
                }
                OrderState::AskRetry => {
                    let yes = self
                        .console
                        .confirm("Do you want to order another amount of this item?")?;
                    flow.answer(yes)?;
                }
                OrderState::Accepted(amount) => {
                    tracing::info!(item = %query, amount, "order placed");
                    return self.notify(CmdMessage::success(confirmation(
                        amount,
                        query.as_str(),
                    )));
                }
                OrderState::Declined => {
                    debug!(item = %query, "order declined");
                    return Ok(());
                }
            }
        }
    }

    fn browse_by_category(&mut self) -> Result<()> {
        let listing = self.api.categories()?;
        let count = listing.categories.len();
        if count == 0 {
            return self.notify(CmdMessage::warning("There are no categories to browse."));
        }
        write_categories(self.console.output(), &listing.categories)?;

        let position = loop {
            self.console.say("Type the number of the category to browse:")?;
            match self.console.read_number()? {
                Some(n) if n >= 1 && n as usize <= count => break n as usize,
                _ => self.notify(CmdMessage::error(format!(
                    "Enter an integer between 1 and {}",
                    count
                )))?,
            }
        };

        let result = self.api.browse(position, &mut self.session)?;
        let out = self.console.output();
        write_messages(out, &result.messages)?;
        write_category_items(out, &result.listed_items)?;
        Ok(())
    }

    fn notify(&mut self, message: CmdMessage) -> Result<()> {
        write_messages(self.console.output(), &[message])
    }

    fn quit(&mut self) -> Result<()> {
        let farewell = match self.user.as_str() {
            "" => "Thank you for your visit!".to_string(),
            user => format!("Thank you for your visit, {}!", user),
        };
        self.console.say("")?;
        self.console.say(farewell.bold())?;
        write_summary(self.console.output(), &self.session.summary())
    }
}
