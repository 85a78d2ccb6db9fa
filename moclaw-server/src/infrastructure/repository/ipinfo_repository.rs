use ipinfo_rs::IpInfo;
use serde_json::Value;

use crate::domain::{errors::AppError, ports::geolocation::GeolocationRepository};

#[derive(Clone)]
pub struct IpInfoRepository {
    ipinfo: IpInfo,
}

impl IpInfoRepository {
    pub fn new(config: ipinfo_rs::types::Config) -> Self {
        let ipinfo = IpInfo::init(Some(config));
        Self { ipinfo }
    }
}

impl GeolocationRepository for IpInfoRepository {
    async fn locate(&self, ip: &str) -> Result<Value, AppError> {
        let location = self.ipinfo.lookup(ip).await?;
        Ok(location)
    }
}
