pub mod report;

#[cfg(test)]
mod report_test;
