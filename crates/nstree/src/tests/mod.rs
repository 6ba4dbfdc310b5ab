mod deep;
mod resolve;
mod scenario;
