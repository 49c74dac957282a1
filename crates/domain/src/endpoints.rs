//! Endpoint tables for every panel resource
//!
//! An operation enum per resource, each variant bound to the panel's logical
//! action name and its relative URL (fixed query parameters included). Adding
//! an operation means adding a variant and a table row; the transport never
//! changes.

use std::fmt;

use crate::impl_endpoint_table;

/// A logical panel operation with a fixed relative path.
pub trait Endpoint: Copy + fmt::Debug + Sized + 'static {
    /// Resource label, used in logs
    const RESOURCE: &'static str;
    /// Every operation in table order
    const ALL: &'static [Self];

    /// Logical operation name, e.g. `"List"`
    fn name(self) -> &'static str;

    /// Relative path, e.g. `"/data?action=getData&table=databases"`
    fn path(self) -> &'static str;

    /// Look up an operation by its logical name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.name() == name)
    }
}

/// Database operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatabaseOp {
    List,
    Add,
    SetPassword,
    Delete,
    Backups,
    ToBackup,
    DelBackup,
    /// Restore a database from a backup file
    InputSql,
}

impl_endpoint_table!(DatabaseOp, "database", {
    List => ("List", "/data?action=getData&table=databases"),
    Add => ("Add", "/database?action=AddDatabase"),
    SetPassword => ("setPassword", "/database?action=ResDatabasePassword"),
    Delete => ("Delete", "/database?action=DeleteDatabase"),
    Backups => ("Backup", "/data?action=getData&table=backup"),
    ToBackup => ("ToBackup", "/database?action=ToBackup"),
    DelBackup => ("DelBackup", "/database?action=DelBackup"),
    InputSql => ("InputSql", "/database?action=InputSql"),
});

/// FTP account operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FtpOp {
    List,
    SetUserPassword,
    SetStatus,
    DeleteUser,
}

impl_endpoint_table!(FtpOp, "ftp", {
    List => ("List", "/data?action=getData&table=ftps"),
    SetUserPassword => ("SetUserPassword", "/ftp?action=SetUserPassword"),
    SetStatus => ("SetStatus", "/ftp?action=SetStatus"),
    DeleteUser => ("DeleteUser", "/ftp?action=DeleteUser"),
});

/// File manager operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileOp {
    Upload,
}

impl_endpoint_table!(FileOp, "file", {
    Upload => ("Upload", "/files?action=upload"),
});

/// One-click deployment plugin operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginOp {
    Deployment,
    SetupPackage,
    GetSpeed,
}

impl_endpoint_table!(PluginOp, "plugin", {
    Deployment => ("Deployment", "/deployment?action=GetList"),
    SetupPackage => ("SetupPackage", "/plugin?action=a&name=deployment&s=SetupPackage"),
    GetSpeed => ("GetSpeed", "/deployment?action=GetSpeed"),
});

/// System status operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemOp {
    GetSystemTotal,
    GetDiskInfo,
    /// Realtime CPU, memory, network and load
    ///
    /// Lives under `/system`; it is not the `/ajax` task-count action.
    GetNetWork,
    GetTaskCount,
    UpdatePanel,
    GetConfig,
}

impl_endpoint_table!(SystemOp, "system", {
    GetSystemTotal => ("GetSystemTotal", "/system?action=GetSystemTotal"),
    GetDiskInfo => ("GetDiskInfo", "/system?action=GetDiskInfo"),
    GetNetWork => ("GetNetWork", "/system?action=GetNetWork"),
    GetTaskCount => ("GetTaskCount", "/ajax?action=GetTaskCount"),
    UpdatePanel => ("UpdatePanel", "/ajax?action=UpdatePanel"),
    GetConfig => ("GetConfig", "/config?action=get_config"),
});

/// Website operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteOp {
    Websites,
    WebTypes,
    GetPhpVersion,
    GetSitePhpVersion,
    SetPhpVersion,
    AddSite,
    DeleteSite,
    StopSite,
    StartSite,
    SetExpired,
    SetPs,
    WebBackups,
    ToBackup,
    DelBackup,
    DomainList,
    AddDomain,
    DelDomain,
    GetRewriteList,
    GetSiteRewrite,
    SetSiteRewrite,
    WebPath,
    SetHasPwd,
    CloseHasPwd,
    GetDirUserIni,
    GetDirBinding,
    AddDirBinding,
    DelDirBinding,
    GetDirRewrite,
    SetSiteRunPath,
    GetSiteLogs,
    GetSecurity,
    SetSecurity,
    GetSsl,
    HttpToHttps,
    CloseToHttps,
    SetSsl,
    RenewCert,
    ApplyCertApi,
    CloseSslConf,
    GetIndex,
    SetIndex,
    GetLimitNet,
    SetLimitNet,
    CloseLimitNet,
    Get301Status,
    Set301Status,
    GetProxyList,
    CreateProxy,
    ModifyProxy,
    GetFileBody,
    SaveFileBody,
    GetRedirectList,
    ModifyRedirect,
    CreateRedirect,
    DeleteRedirect,
    GetRedirectFile,
    SaveRedirectFile,
}

impl_endpoint_table!(SiteOp, "site", {
    Websites => ("Websites", "/data?action=getData&table=sites"),
    WebTypes => ("WebTypes", "/site?action=get_site_types"),
    GetPhpVersion => ("GetPHPVersion", "/site?action=GetPHPVersion"),
    GetSitePhpVersion => ("GetSitePHPVersion", "/site?action=GetSitePHPVersion"),
    SetPhpVersion => ("SetPHPVersion", "/site?action=SetPHPVersion"),
    AddSite => ("AddSite", "/site?action=AddSite"),
    DeleteSite => ("DeleteSite", "/site?action=DeleteSite"),
    StopSite => ("StopSite", "/site?action=SiteStop"),
    StartSite => ("StartSite", "/site?action=SiteStart"),
    SetExpired => ("SetExpired", "/site?action=SetEdate"),
    SetPs => ("SetPs", "/data?action=setPs&table=sites"),
    WebBackups => ("WebBackups", "/data?action=getData&table=backup"),
    ToBackup => ("ToBackup", "/site?action=ToBackup"),
    DelBackup => ("DelBackup", "/site?action=DelBackup"),
    DomainList => ("DomainList", "/data?action=getData&table=domain"),
    AddDomain => ("AddDomain", "/site?action=AddDomain"),
    DelDomain => ("DelDomain", "/site?action=DelDomain"),
    GetRewriteList => ("GetRewriteList", "/site?action=GetRewriteList"),
    GetSiteRewrite => ("GetSiteRewrite", "/site?action=GetSiteRewrite"),
    SetSiteRewrite => ("SetSiteRewrite", "/site?action=SetSiteRewrite"),
    WebPath => ("WebPath", "/data?action=getKey&table=sites&key=path"),
    SetHasPwd => ("SetHasPwd", "/site?action=SetHasPwd"),
    CloseHasPwd => ("CloseHasPwd", "/site?action=CloseHasPwd"),
    GetDirUserIni => ("GetDirUserINI", "/site?action=GetDirUserINI"),
    GetDirBinding => ("GetDirBinding", "/site?action=GetDirBinding"),
    AddDirBinding => ("AddDirBinding", "/site?action=AddDirBinding"),
    DelDirBinding => ("DelDirBinding", "/site?action=DelDirBinding"),
    GetDirRewrite => ("GetDirRewrite", "/site?action=GetDirRewrite"),
    SetSiteRunPath => ("SetSiteRunPath", "/site?action=SetSiteRunPath"),
    GetSiteLogs => ("GetSiteLogs", "/site?action=GetSiteLogs"),
    GetSecurity => ("GetSecurity", "/site?action=GetSecurity"),
    SetSecurity => ("SetSecurity", "/site?action=SetSecurity"),
    GetSsl => ("GetSSL", "/site?action=GetSSL"),
    HttpToHttps => ("HttpToHttps", "/site?action=HttpToHttps"),
    CloseToHttps => ("CloseToHttps", "/site?action=CloseToHttps"),
    SetSsl => ("SetSSL", "/site?action=SetSSL"),
    RenewCert => ("RenewCert", "/acme?action=renew_cert"),
    ApplyCertApi => ("ApplyCertApi", "/acme?action=apply_cert_api"),
    CloseSslConf => ("CloseSSLConf", "/site?action=CloseSSLConf"),
    GetIndex => ("GetIndex", "/site?action=GetIndex"),
    SetIndex => ("SetIndex", "/site?action=SetIndex"),
    GetLimitNet => ("GetLimitNet", "/site?action=GetLimitNet"),
    SetLimitNet => ("SetLimitNet", "/site?action=SetLimitNet"),
    CloseLimitNet => ("CloseLimitNet", "/site?action=CloseLimitNet"),
    Get301Status => ("Get301Status", "/site?action=Get301Status"),
    Set301Status => ("Set301Status", "/site?action=Set301Status"),
    GetProxyList => ("GetProxyList", "/site?action=GetProxyList"),
    CreateProxy => ("CreateProxy", "/site?action=CreateProxy"),
    ModifyProxy => ("ModifyProxy", "/site?action=ModifyProxy"),
    GetFileBody => ("GetFileBody", "/files?action=GetFileBody"),
    SaveFileBody => ("SaveFileBody", "/files?action=SaveFileBody"),
    GetRedirectList => ("GetRedirectList", "/site?action=GetRedirectList"),
    ModifyRedirect => ("ModifyRedirect", "/site?action=ModifyRedirect"),
    CreateRedirect => ("CreateRedirect", "/site?action=CreateRedirect"),
    DeleteRedirect => ("DeleteRedirect", "/site?action=DeleteRedirect"),
    GetRedirectFile => ("GetRedirectFile", "/site?action=GetRedirectFile"),
    SaveRedirectFile => ("SaveRedirectFile", "/site?action=SaveRedirectFile"),
});
