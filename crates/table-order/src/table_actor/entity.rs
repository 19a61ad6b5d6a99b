use super::actions::{TableAction, TableActionResult};
use super::error::TableError;
use crate::model::{DiningTable, TableCreate, TableId, TableStatus, TableUpdate, ValidationErrors};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for DiningTable {
    type Id = TableId;
    type Create = TableCreate;
    type Update = TableUpdate;
    type Action = TableAction;
    type ActionResult = TableActionResult;
    type Context = ();
    type Error = TableError;

    fn from_create_params(id: TableId, params: TableCreate) -> Result<Self, TableError> {
        params.validate().map_err(TableError::Validation)?;
        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            number: params.number,
            seats: params.seats,
            status: TableStatus::Available,
        })
    }

    async fn on_update(&mut self, update: TableUpdate, _ctx: &()) -> Result<(), TableError> {
        if let Some(seats) = update.seats {
            if seats == 0 {
                let mut errors = ValidationErrors::new();
                errors.add("seats", "Number of seats must be greater than 0");
                return Err(TableError::Validation(errors));
            }
            self.seats = seats;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TableAction,
        _ctx: &(),
    ) -> Result<TableActionResult, TableError> {
        match action {
            TableAction::Occupy { restaurant_id } => {
                if restaurant_id != self.restaurant_id {
                    return Err(TableError::WrongRestaurant {
                        table: self.id.to_string(),
                        restaurant: restaurant_id.to_string(),
                    });
                }
                if self.status != TableStatus::Available {
                    return Err(TableError::NotAvailable {
                        number: self.number,
                        status: self.status,
                    });
                }
                self.status = TableStatus::Occupied;
                Ok(TableActionResult::Occupy(()))
            }
            TableAction::Release => {
                self.status = TableStatus::Available;
                Ok(TableActionResult::Release(()))
            }
            TableAction::SetStatus(status) => {
                let previous = self.status;
                self.status = status;
                info!(table = %self.id, %previous, %status, "Status changed");
                Ok(TableActionResult::SetStatus(previous))
            }
        }
    }
}
