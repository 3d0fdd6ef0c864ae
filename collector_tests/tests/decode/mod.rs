mod collector_payload;
mod round_trip;
