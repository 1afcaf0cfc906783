//! In-memory `TransporterApi` that records calls and replays canned results.

use std::cell::RefCell;

use async_trait::async_trait;

use super::api::TransporterApi;
use super::error::ApiError;
use super::types::{CreateDriverResponse, Driver, DriverPayload, Truck, TruckMode, TruckPayload};

pub(crate) struct FakeApi {
    pub drivers: Result<Vec<Driver>, ApiError>,
    pub trucks: Result<Vec<Truck>, ApiError>,
    pub create_driver: Result<CreateDriverResponse, ApiError>,
    pub save_truck: Result<(), ApiError>,
    pub driver_requests: RefCell<Vec<DriverPayload>>,
    pub truck_requests: RefCell<Vec<(TruckMode, TruckPayload)>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            drivers: Ok(Vec::new()),
            trucks: Ok(Vec::new()),
            create_driver: Ok(CreateDriverResponse { success: true, message: None }),
            save_truck: Ok(()),
            driver_requests: RefCell::new(Vec::new()),
            truck_requests: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn request_count(&self) -> usize {
        self.driver_requests.borrow().len() + self.truck_requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl TransporterApi for FakeApi {
    async fn list_drivers(&self) -> Result<Vec<Driver>, ApiError> {
        self.drivers.clone()
    }

    async fn create_driver(&self, payload: &DriverPayload) -> Result<CreateDriverResponse, ApiError> {
        self.driver_requests.borrow_mut().push(payload.clone());
        self.create_driver.clone()
    }

    async fn list_trucks(&self) -> Result<Vec<Truck>, ApiError> {
        self.trucks.clone()
    }

    async fn save_truck(&self, mode: TruckMode, payload: &TruckPayload) -> Result<(), ApiError> {
        self.truck_requests.borrow_mut().push((mode, payload.clone()));
        self.save_truck.clone()
    }
}
