//! Websites: lifecycle, domains, rewrite rules, SSL, proxies and redirects
//!
//! Field names mirror the panel's form API exactly, including its mixed
//! casing (`siteName` vs `sitename`) and spellings (`codeing`).

use btpanel_domain::{Params, Result, SiteOp};
use serde_json::{json, Value};

use crate::panel::PanelClient;

/// Query for [`Site::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteQuery {
    pub search: String,
    pub page: u32,
    pub limit: u32,
    /// Site category id, `-1` for all
    pub type_id: String,
    pub order: String,
}

impl Default for SiteQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            limit: 200,
            type_id: "-1".to_string(),
            order: "id desc".to_string(),
        }
    }
}

/// Arguments for [`Site::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSite {
    /// Primary domain
    pub domain: String,
    /// Document root
    pub path: String,
    pub remark: String,
    /// PHP version without the dot, e.g. `74`
    pub php_version: String,
    pub port: String,
    pub type_id: i64,
    /// Create an FTP account alongside the site
    pub ftp: bool,
    pub ftp_username: String,
    pub ftp_password: String,
    /// Database engine to provision, e.g. `MySQL`
    pub sql: String,
    pub encoding: String,
    pub db_user: String,
    pub db_password: String,
}

impl NewSite {
    pub fn new(domain: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            path: path.into(),
            remark: String::new(),
            php_version: String::new(),
            port: "80".to_string(),
            type_id: 0,
            ftp: false,
            ftp_username: String::new(),
            ftp_password: String::new(),
            sql: "MySQL".to_string(),
            encoding: "utf8".to_string(),
            db_user: String::new(),
            db_password: String::new(),
        }
    }

    #[must_use]
    pub fn with_php_version(mut self, version: impl Into<String>) -> Self {
        self.php_version = version.into();
        self
    }

    #[must_use]
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }

    #[must_use]
    pub fn with_ftp(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.ftp = true;
        self.ftp_username = username.into();
        self.ftp_password = password.into();
        self
    }

    #[must_use]
    pub fn with_database(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.db_user = user.into();
        self.db_password = password.into();
        self
    }

    fn into_params(self) -> Params {
        // The panel expects the domain set as a JSON document.
        let webname = json!({ "domain": self.domain, "domainlist": [], "count": 0 }).to_string();
        Params::new()
            .with("webname", webname)
            .with("path", self.path)
            .with("type_id", self.type_id)
            .with("type", "PHP")
            .with("version", self.php_version)
            .with("port", self.port)
            .with("ps", self.remark)
            .with("ftp", self.ftp)
            .with("ftp_username", self.ftp_username)
            .with("ftp_password", self.ftp_password)
            .with("sql", self.sql)
            .with("codeing", self.encoding)
            .with("datauser", self.db_user)
            .with("datapassword", self.db_password)
    }
}

/// What else to remove along with a site in [`Site::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteDeletion {
    pub ftp: bool,
    pub database: bool,
    /// Remove the document root
    pub path: bool,
}

impl SiteDeletion {
    /// Remove the site and everything attached to it.
    pub const ALL: Self = Self { ftp: true, database: true, path: true };
    /// Remove only the site record and vhost.
    pub const SITE_ONLY: Self = Self { ftp: false, database: false, path: false };
}

impl Default for SiteDeletion {
    fn default() -> Self {
        Self::ALL
    }
}

/// Anti-leech settings for [`Site::set_security`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityRule {
    pub id: i64,
    pub name: String,
    /// Protected extensions, comma separated
    pub fix: String,
    /// Allowed referer domains, comma separated
    pub domains: String,
    pub status: String,
    pub return_rule: String,
    /// Allow empty referer
    pub none: String,
}

/// Traffic limits for [`Site::set_limit_net`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub id: i64,
    /// Concurrent connections per site
    pub per_server: i64,
    /// Concurrent connections per IP
    pub per_ip: i64,
    /// Per-request bandwidth in KB/s
    pub limit_rate: i64,
}

/// Reverse proxy definition for [`Site::create_proxy`] and [`Site::modify_proxy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRule {
    pub site_name: String,
    pub name: String,
    pub dir: String,
    /// Upstream URL
    pub target: String,
    /// Host header sent upstream
    pub to_domain: String,
    pub cache: i64,
    pub cache_minutes: i64,
    pub advanced: i64,
    /// Content substitutions, as the panel's JSON array
    pub sub_filter: String,
    /// `1` enabled, `0` disabled
    pub enabled: i64,
}

impl ProxyRule {
    fn into_params(self) -> Params {
        Params::new()
            .with("cache", self.cache)
            .with("proxyname", self.name)
            .with("cachetime", self.cache_minutes)
            .with("proxydir", self.dir)
            .with("proxysite", self.target)
            .with("todomain", self.to_domain)
            .with("advanced", self.advanced)
            .with("sitename", self.site_name)
            .with("subfilter", self.sub_filter)
            .with("type", self.enabled)
    }
}

/// Redirect definition for [`Site::create_redirect`] and [`Site::modify_redirect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub site_name: String,
    pub name: String,
    pub to_url: String,
    /// Source domains, sent as a JSON array
    pub domains: Vec<String>,
    pub path: String,
    /// HTTP status, `301` or `302`
    pub redirect_type: String,
    /// `1` enabled, `0` disabled
    pub enabled: i64,
    /// `domain` or `path`
    pub match_on: String,
    pub keep_path: i64,
}

impl RedirectRule {
    fn into_params(self) -> Params {
        Params::new()
            .with("sitename", self.site_name)
            .with("redirectname", self.name)
            .with("tourl", self.to_url)
            .with("redirectdomain", self.domains)
            .with("redirectpath", self.path)
            .with("redirecttype", self.redirect_type)
            .with("type", self.enabled)
            .with("domainorpath", self.match_on)
            .with("holdpath", self.keep_path)
    }
}

pub struct Site<'a> {
    client: &'a PanelClient,
}

impl<'a> Site<'a> {
    pub(crate) fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    async fn send(&self, op: SiteOp, params: Params) -> Result<Value> {
        self.client.call(op, params).await
    }

    fn by_site_name(site_name: &str) -> Params {
        Params::new().with("siteName", site_name)
    }

    fn by_id(id: i64) -> Params {
        Params::new().with("id", id)
    }

    /* ---- listing and lifecycle ---- */

    pub async fn list(&self, query: SiteQuery) -> Result<Value> {
        let params = Params::new()
            .with("search", query.search)
            .with("p", query.page)
            .with("limit", query.limit)
            .with("type", query.type_id)
            .with("order", query.order)
            .with("table", "sites");
        self.send(SiteOp::Websites, params).await
    }

    /// Site categories.
    pub async fn types(&self) -> Result<Value> {
        self.send(SiteOp::WebTypes, Params::new()).await
    }

    /// Installed PHP versions.
    pub async fn php_versions(&self) -> Result<Value> {
        self.send(SiteOp::GetPhpVersion, Params::new()).await
    }

    pub async fn php_version(&self, site_name: &str) -> Result<Value> {
        self.send(SiteOp::GetSitePhpVersion, Self::by_site_name(site_name)).await
    }

    pub async fn set_php_version(&self, site_name: &str, version: &str) -> Result<Value> {
        let params = Self::by_site_name(site_name).with("version", version);
        self.send(SiteOp::SetPhpVersion, params).await
    }

    pub async fn add(&self, site: NewSite) -> Result<Value> {
        self.send(SiteOp::AddSite, site.into_params()).await
    }

    pub async fn delete(&self, id: i64, webname: &str, remove: SiteDeletion) -> Result<Value> {
        let mut params = Self::by_id(id).with("webname", webname);
        if remove.ftp {
            params.insert("ftp", 1);
        }
        if remove.database {
            params.insert("database", 1);
        }
        if remove.path {
            params.insert("path", 1);
        }
        self.send(SiteOp::DeleteSite, params).await
    }

    pub async fn stop(&self, id: i64, name: &str) -> Result<Value> {
        self.send(SiteOp::StopSite, Self::by_id(id).with("name", name)).await
    }

    pub async fn start(&self, id: i64, name: &str) -> Result<Value> {
        self.send(SiteOp::StartSite, Self::by_id(id).with("name", name)).await
    }

    /// Set the expiry date (`YYYY-MM-DD`, `0000-00-00` for never).
    pub async fn set_expiry(&self, id: i64, date: &str) -> Result<Value> {
        self.send(SiteOp::SetExpired, Self::by_id(id).with("edate", date)).await
    }

    pub async fn set_remark(&self, id: i64, remark: &str) -> Result<Value> {
        self.send(SiteOp::SetPs, Self::by_id(id).with("ps", remark)).await
    }

    /* ---- backups ---- */

    pub async fn backups(&self, id: i64, page: u32, limit: u32) -> Result<Value> {
        let params = Params::new()
            .with("type", 0)
            .with("limit", limit)
            .with("p", page)
            .with("search", id);
        self.send(SiteOp::WebBackups, params).await
    }

    pub async fn create_backup(&self, id: i64) -> Result<Value> {
        self.send(SiteOp::ToBackup, Self::by_id(id)).await
    }

    pub async fn delete_backup(&self, id: i64) -> Result<Value> {
        self.send(SiteOp::DelBackup, Self::by_id(id)).await
    }

    /* ---- domains ---- */

    pub async fn domains(&self, id: i64) -> Result<Value> {
        let params = Params::new().with("search", id).with("list", true);
        self.send(SiteOp::DomainList, params).await
    }

    /// Add domains; several may be given comma separated, each optionally `:port`.
    pub async fn add_domain(&self, id: i64, webname: &str, domains: &str) -> Result<Value> {
        let params = Self::by_id(id).with("webname", webname).with("domain", domains);
        self.send(SiteOp::AddDomain, params).await
    }

    pub async fn delete_domain(
        &self,
        id: i64,
        webname: &str,
        domain: &str,
        port: u32,
    ) -> Result<Value> {
        let params = Self::by_id(id)
            .with("webname", webname)
            .with("domain", domain)
            .with("port", port);
        self.send(SiteOp::DelDomain, params).await
    }

    /* ---- rewrite rules and paths ---- */

    /// Built-in rewrite templates.
    pub async fn rewrite_templates(&self, site_name: &str) -> Result<Value> {
        self.send(SiteOp::GetRewriteList, Self::by_site_name(site_name)).await
    }

    pub async fn rewrite(&self, site_name: &str) -> Result<Value> {
        self.send(SiteOp::GetSiteRewrite, Self::by_site_name(site_name)).await
    }

    pub async fn set_rewrite(&self, site_name: &str, rules: &str) -> Result<Value> {
        let params = Self::by_site_name(site_name).with("data", rules);
        self.send(SiteOp::SetSiteRewrite, params).await
    }

    pub async fn set_run_path(&self, id: i64, run_path: &str) -> Result<Value> {
        self.send(SiteOp::SetSiteRunPath, Self::by_id(id).with("runPath", run_path)).await
    }

    pub async fn root_path(&self, id: i64) -> Result<Value> {
        self.send(SiteOp::WebPath, Self::by_id(id)).await
    }

    /// Rewrite rules for a bound subdirectory; `create` asks the panel to
    /// create the rule file when missing.
    pub async fn dir_rewrite(&self, id: i64, create: bool) -> Result<Value> {
        let mut params = Self::by_id(id);
        if create {
            params.insert("add", 1);
        }
        self.send(SiteOp::GetDirRewrite, params).await
    }

    pub async fn dir_user_ini(&self, id: i64, path: &str) -> Result<Value> {
        self.send(SiteOp::GetDirUserIni, Self::by_id(id).with("path", path)).await
    }

    pub async fn dir_bindings(&self, id: i64) -> Result<Value> {
        self.send(SiteOp::GetDirBinding, Self::by_id(id)).await
    }

    pub async fn add_dir_binding(&self, id: i64, domain: &str, dir_name: &str) -> Result<Value> {
        let params = Self::by_id(id).with("domain", domain).with("dirName", dir_name);
        self.send(SiteOp::AddDirBinding, params).await
    }

    /// `id` is the binding id, not the site id.
    pub async fn delete_dir_binding(&self, id: i64) -> Result<Value> {
        self.send(SiteOp::DelDirBinding, Self::by_id(id)).await
    }

    /* ---- access control ---- */

    pub async fn set_password_access(
        &self,
        id: i64,
        username: &str,
        password: &str,
    ) -> Result<Value> {
        let params = Self::by_id(id).with("username", username).with("password", password);
        self.send(SiteOp::SetHasPwd, params).await
    }

    pub async fn close_password_access(&self, id: i64) -> Result<Value> {
        self.send(SiteOp::CloseHasPwd, Self::by_id(id)).await
    }

    pub async fn logs(&self, site_name: &str) -> Result<Value> {
        self.send(SiteOp::GetSiteLogs, Self::by_site_name(site_name)).await
    }

    /// Anti-leech configuration.
    pub async fn security(&self, id: i64, name: &str) -> Result<Value> {
        self.send(SiteOp::GetSecurity, Self::by_id(id).with("name", name)).await
    }

    pub async fn set_security(&self, rule: SecurityRule) -> Result<Value> {
        let params = Self::by_id(rule.id)
            .with("name", rule.name)
            .with("fix", rule.fix)
            .with("domains", rule.domains)
            .with("status", rule.status)
            .with("return_rule", rule.return_rule)
            .with("none", rule.none);
        self.send(SiteOp::SetSecurity, params).await
    }

    /* ---- SSL ---- */

    pub async fn ssl(&self, site_name: &str) -> Result<Value> {
        self.send(SiteOp::GetSsl, Self::by_site_name(site_name)).await
    }

    /// Install a certificate: `key` is the private key, `csr` the PEM chain.
    pub async fn set_ssl(
        &self,
        ssl_type: &str,
        site_name: &str,
        key: &str,
        csr: &str,
    ) -> Result<Value> {
        let params = Params::new()
            .with("type", ssl_type)
            .with("siteName", site_name)
            .with("key", key)
            .with("csr", csr);
        self.send(SiteOp::SetSsl, params).await
    }

    pub async fn close_ssl(&self, update_of: &str, site_name: &str) -> Result<Value> {
        let params = Params::new().with("updateOf", update_of).with("siteName", site_name);
        self.send(SiteOp::CloseSslConf, params).await
    }

    pub async fn force_https(&self, site_name: &str) -> Result<Value> {
        self.send(SiteOp::HttpToHttps, Self::by_site_name(site_name)).await
    }

    pub async fn close_force_https(&self, site_name: &str) -> Result<Value> {
        self.send(SiteOp::CloseToHttps, Self::by_site_name(site_name)).await
    }

    pub async fn renew_cert(&self, index: &str) -> Result<Value> {
        self.send(SiteOp::RenewCert, Params::new().with("index", index)).await
    }

    /// Request a Let's Encrypt certificate for `domain` via HTTP validation.
    pub async fn apply_cert(&self, id: i64, domain: &str) -> Result<Value> {
        let params = Params::new()
            .with("domains", vec![domain])
            .with("auth_type", "http")
            .with("auth_to", id)
            .with("auto_wildcard", 0)
            .with("id", id);
        self.send(SiteOp::ApplyCertApi, params).await
    }

    /* ---- default documents and traffic ---- */

    pub async fn index(&self, id: i64) -> Result<Value> {
        self.send(SiteOp::GetIndex, Self::by_id(id)).await
    }

    /// `index` is a comma separated list, e.g. `index.php,index.html`.
    pub async fn set_index(&self, id: i64, index: &str) -> Result<Value> {
        self.send(SiteOp::SetIndex, Self::by_id(id).with("Index", index)).await
    }

    pub async fn limit_net(&self, id: i64) -> Result<Value> {
        self.send(SiteOp::GetLimitNet, Self::by_id(id)).await
    }

    pub async fn set_limit_net(&self, limit: RateLimit) -> Result<Value> {
        let params = Self::by_id(limit.id)
            .with("perserver", limit.per_server)
            .with("perip", limit.per_ip)
            .with("limit_rate", limit.limit_rate);
        self.send(SiteOp::SetLimitNet, params).await
    }

    pub async fn close_limit_net(&self, id: i64) -> Result<Value> {
        self.send(SiteOp::CloseLimitNet, Self::by_id(id)).await
    }

    /* ---- 301, proxies and redirects ---- */

    pub async fn redirect_301(&self, site_name: &str) -> Result<Value> {
        self.send(SiteOp::Get301Status, Self::by_site_name(site_name)).await
    }

    pub async fn set_redirect_301(
        &self,
        site_name: &str,
        to_domain: &str,
        src_domain: &str,
        enabled: i64,
    ) -> Result<Value> {
        let params = Self::by_site_name(site_name)
            .with("toDomain", to_domain)
            .with("srcDomain", src_domain)
            .with("type", enabled);
        self.send(SiteOp::Set301Status, params).await
    }

    pub async fn proxies(&self, site_name: &str) -> Result<Value> {
        self.send(SiteOp::GetProxyList, Self::by_site_name(site_name)).await
    }

    pub async fn create_proxy(&self, rule: ProxyRule) -> Result<Value> {
        self.send(SiteOp::CreateProxy, rule.into_params()).await
    }

    pub async fn modify_proxy(&self, rule: ProxyRule) -> Result<Value> {
        self.send(SiteOp::ModifyProxy, rule.into_params()).await
    }

    pub async fn redirects(&self, site_name: &str) -> Result<Value> {
        self.send(SiteOp::GetRedirectList, Params::new().with("sitename", site_name)).await
    }

    pub async fn create_redirect(&self, rule: RedirectRule) -> Result<Value> {
        self.send(SiteOp::CreateRedirect, rule.into_params()).await
    }

    pub async fn modify_redirect(&self, rule: RedirectRule) -> Result<Value> {
        self.send(SiteOp::ModifyRedirect, rule.into_params()).await
    }

    pub async fn delete_redirect(&self, site_name: &str, name: &str) -> Result<Value> {
        let params = Params::new().with("sitename", site_name).with("redirectname", name);
        self.send(SiteOp::DeleteRedirect, params).await
    }

    /// Generated server config for a redirect; `webserver` is usually `nginx`.
    pub async fn redirect_file(
        &self,
        site_name: &str,
        name: &str,
        webserver: &str,
    ) -> Result<Value> {
        let params = Params::new()
            .with("sitename", site_name)
            .with("redirectname", name)
            .with("webserver", webserver);
        self.send(SiteOp::GetRedirectFile, params).await
    }

    pub async fn save_redirect_file(
        &self,
        path: &str,
        contents: &str,
        encoding: Option<&str>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("path", path)
            .with("data", contents)
            .with("encoding", encoding.unwrap_or("utf-8"));
        self.send(SiteOp::SaveRedirectFile, params).await
    }

    /* ---- raw config files ---- */

    pub async fn file_body(&self, path: &str) -> Result<Value> {
        self.send(SiteOp::GetFileBody, Params::new().with("path", path)).await
    }

    pub async fn save_file_body(&self, path: &str, contents: &str) -> Result<Value> {
        let params = Params::new()
            .with("path", path)
            .with("data", contents)
            .with("encoding", "utf-8");
        self.send(SiteOp::SaveFileBody, params).await
    }
}
