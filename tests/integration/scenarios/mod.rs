mod costing;
mod inventory;
mod lifecycle;
mod references;
mod report;
mod stats;
