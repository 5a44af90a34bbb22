use reqmin_resolver::selftest;
use reqmin_util::errors::ReqminResult;

pub fn exec() -> ReqminResult<()> {
    let report = selftest::run();
    println!("{}", report.to_string().trim_end());
    if report.is_success() {
        Ok(())
    } else {
        Err(miette::miette!(
            "{} of {} self-test cases failed",
            report.failures.len(),
            report.len()
        ))
    }
}
