use crate::models::SourceDescriptor;
use tracing::debug;

/// Ordered catalog of every known channel source.
///
/// Enumeration order is stable and decides which record survives when two
/// sources publish the same stream endpoint.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    sources: Vec<SourceDescriptor>,
}

impl SourceRegistry {
    pub fn new(sources: Vec<SourceDescriptor>) -> Self {
        Self { sources }
    }

    /// The built-in catalog of public playlists and structured-feed regions
    pub fn builtin() -> Self {
        Self::new(vec![
            SourceDescriptor::plain_text(
                "samsung_br",
                "Samsung TV Plus Brasil",
                "https://www.apsattv.com/ssungbra.m3u",
                "BR",
            ),
            SourceDescriptor::plain_text(
                "lg_br",
                "LG Channels Brasil",
                "https://www.apsattv.com/brlg.m3u",
                "BR",
            ),
            SourceDescriptor::plain_text(
                "tcl_br",
                "TCL Brasil",
                "https://www.apsattv.com/tclbr.m3u",
                "BR",
            ),
            SourceDescriptor::plain_text(
                "soultv_br",
                "Soul TV Brasil",
                "https://www.apsattv.com/soultv.m3u",
                "BR",
            ),
            SourceDescriptor::plain_text(
                "redeitv_br",
                "Rede iTV Brasil",
                "https://www.apsattv.com/redeitv.m3u",
                "BR",
            ),
            SourceDescriptor::plain_text(
                "movieark_br",
                "Movieark Brasil",
                "https://www.apsattv.com/moviearkbr.m3u",
                "BR",
            ),
            SourceDescriptor::plain_text(
                "iptv_org_br",
                "IPTV-Org Brasil",
                "https://iptv-org.github.io/iptv/countries/br.m3u",
                "BR",
            ),
            SourceDescriptor::plain_text(
                "freetv_br",
                "Free-TV Brasil",
                "https://raw.githubusercontent.com/Free-TV/IPTV/master/playlists/playlist_brazil.m3u8",
                "BR",
            ),
            SourceDescriptor::plain_text(
                "fta_br",
                "FTA-IPTV Brasil",
                "https://raw.githubusercontent.com/joaoguidugli/FTA-IPTV-Brasil/master/playlist.m3u8",
                "BR",
            ),
            SourceDescriptor::plain_text(
                "plutotv_br",
                "Pluto TV Brasil",
                "https://raw.githubusercontent.com/BuddyChewChew/app-m3u-generator/refs/heads/main/playlists/plutotv_br.m3u",
                "BR",
            ),
            SourceDescriptor::plain_text(
                "plex_us",
                "Plex TV US",
                "https://raw.githubusercontent.com/BuddyChewChew/app-m3u-generator/refs/heads/main/playlists/plex_us.m3u",
                "US",
            ),
            SourceDescriptor::plain_text(
                "plex_ca",
                "Plex TV CA",
                "https://raw.githubusercontent.com/BuddyChewChew/app-m3u-generator/refs/heads/main/playlists/plex_ca.m3u",
                "CA",
            ),
            SourceDescriptor::plain_text(
                "plex_gb",
                "Plex TV UK",
                "https://raw.githubusercontent.com/BuddyChewChew/app-m3u-generator/refs/heads/main/playlists/plex_gb.m3u",
                "GB",
            ),
            SourceDescriptor::plain_text(
                "firetv_us",
                "Amazon Fire TV",
                "https://www.apsattv.com/firetv.m3u",
                "US",
            ),
            SourceDescriptor::plain_text(
                "localnow_us",
                "Local Now",
                "https://www.apsattv.com/localnow.m3u",
                "US",
            ),
            SourceDescriptor::plain_text(
                "distrotv",
                "DistroTV",
                "https://www.apsattv.com/distro.m3u",
                "US",
            ),
            SourceDescriptor::plain_text(
                "vizio_us",
                "Vizio TV",
                "https://www.apsattv.com/vizio.m3u",
                "US",
            ),
            SourceDescriptor::plain_text(
                "roku_us",
                "Roku Channel",
                "https://raw.githubusercontent.com/BuddyChewChew/app-m3u-generator/refs/heads/main/playlists/roku_all.m3u",
                "US",
            ),
            SourceDescriptor::plain_text(
                "xumo_us",
                "XUMO",
                "https://raw.githubusercontent.com/BuddyChewChew/xumo-playlist-generator/refs/heads/main/playlists/xumo_playlist.m3u",
                "US",
            ),
            SourceDescriptor::plain_text(
                "tubi_us",
                "Tubi TV",
                "https://raw.githubusercontent.com/BuddyChewChew/app-m3u-generator/refs/heads/main/playlists/tubi_all.m3u",
                "US",
            ),
            SourceDescriptor::plain_text(
                "stirr_us",
                "Stirr TV",
                "https://raw.githubusercontent.com/BuddyChewChew/app-m3u-generator/refs/heads/main/playlists/stirr_all.m3u",
                "US",
            ),
            SourceDescriptor::plain_text(
                "plutotv_us",
                "Pluto TV US",
                "https://raw.githubusercontent.com/BuddyChewChew/app-m3u-generator/refs/heads/main/playlists/plutotv_us.m3u",
                "US",
            ),
            SourceDescriptor::plain_text(
                "iptv_org_us",
                "IPTV-Org US",
                "https://iptv-org.github.io/iptv/countries/us.m3u",
                "US",
            ),
            SourceDescriptor::plain_text(
                "freetv_us",
                "Free-TV USA",
                "https://raw.githubusercontent.com/Free-TV/IPTV/master/playlists/playlist_usa.m3u8",
                "US",
            ),
            SourceDescriptor::plain_text(
                "lg_ca",
                "LG Channels CA",
                "https://www.apsattv.com/calg.m3u",
                "CA",
            ),
            SourceDescriptor::plain_text(
                "plutotv_ca",
                "Pluto TV CA",
                "https://raw.githubusercontent.com/BuddyChewChew/app-m3u-generator/refs/heads/main/playlists/plutotv_ca.m3u",
                "CA",
            ),
            SourceDescriptor::plain_text(
                "iptv_org_ca",
                "IPTV-Org CA",
                "https://iptv-org.github.io/iptv/countries/ca.m3u",
                "CA",
            ),
            SourceDescriptor::plain_text(
                "freetv_ca",
                "Free-TV Canada",
                "https://raw.githubusercontent.com/Free-TV/IPTV/master/playlists/playlist_canada.m3u8",
                "CA",
            ),
            SourceDescriptor::plain_text(
                "lg_gb",
                "LG Channels UK",
                "https://www.apsattv.com/gblg.m3u",
                "GB",
            ),
            SourceDescriptor::plain_text(
                "plutotv_gb",
                "Pluto TV UK",
                "https://raw.githubusercontent.com/BuddyChewChew/app-m3u-generator/refs/heads/main/playlists/plutotv_gb.m3u",
                "GB",
            ),
            SourceDescriptor::plain_text(
                "iptv_org_gb",
                "IPTV-Org UK",
                "https://iptv-org.github.io/iptv/countries/uk.m3u",
                "GB",
            ),
            SourceDescriptor::plain_text(
                "freetv_gb",
                "Free-TV UK",
                "https://raw.githubusercontent.com/Free-TV/IPTV/master/playlists/playlist_uk.m3u8",
                "GB",
            ),
            SourceDescriptor::plain_text(
                "vidaa_br",
                "Vidaa TV",
                "https://www.apsattv.com/vidaa.m3u",
                "BR",
            ),
            SourceDescriptor::plain_text(
                "samsung_au",
                "Samsung TV Plus AU",
                "https://www.apsattv.com/ssungaus.m3u",
                "AU",
            ),
            SourceDescriptor::plain_text(
                "lg_au",
                "LG Channels AU",
                "https://www.apsattv.com/aulg.m3u",
                "AU",
            ),
            SourceDescriptor::plain_text(
                "9fast_au",
                "9Fast AU",
                "https://www.apsattv.com/9fast.m3u",
                "AU",
            ),
            SourceDescriptor::plain_text(
                "koganplus_au",
                "Koganplus AU",
                "https://www.apsattv.com/koganplus.m3u",
                "AU",
            ),
            SourceDescriptor::plain_text(
                "plex_au",
                "Plex TV AU",
                "https://raw.githubusercontent.com/BuddyChewChew/app-m3u-generator/refs/heads/main/playlists/plex_au.m3u",
                "AU",
            ),
            SourceDescriptor::plain_text(
                "iptv_org_au",
                "IPTV-Org AU",
                "https://iptv-org.github.io/iptv/countries/au.m3u",
                "AU",
            ),
            SourceDescriptor::plain_text(
                "freetv_au",
                "Free-TV Australia",
                "https://raw.githubusercontent.com/Free-TV/IPTV/master/playlists/playlist_australia.m3u8",
                "AU",
            ),
            SourceDescriptor::plain_text(
                "samsung_nz",
                "Samsung TV Plus NZ",
                "https://www.apsattv.com/ssungnz.m3u",
                "NZ",
            ),
            SourceDescriptor::plain_text(
                "lg_nz",
                "LG Channels NZ",
                "https://www.apsattv.com/nzlg.m3u",
                "NZ",
            ),
            SourceDescriptor::plain_text(
                "plex_nz",
                "Plex TV NZ",
                "https://raw.githubusercontent.com/BuddyChewChew/app-m3u-generator/refs/heads/main/playlists/plex_nz.m3u",
                "NZ",
            ),
            SourceDescriptor::plain_text(
                "iptv_org_nz",
                "IPTV-Org NZ",
                "https://iptv-org.github.io/iptv/countries/nz.m3u",
                "NZ",
            ),
            SourceDescriptor::plain_text(
                "samsung_pt",
                "Samsung TV Plus PT",
                "https://www.apsattv.com/ssungpor.m3u",
                "PT",
            ),
            SourceDescriptor::plain_text(
                "lg_pt",
                "LG Channels PT",
                "https://www.apsattv.com/ptlg.m3u",
                "PT",
            ),
            SourceDescriptor::plain_text(
                "m3upt",
                "M3UPT Portugal",
                "https://raw.githubusercontent.com/LITUATUI/M3UPT/main/M3U/M3UPT.m3u",
                "PT",
            ),
            SourceDescriptor::plain_text(
                "iptv_org_pt",
                "IPTV-Org PT",
                "https://iptv-org.github.io/iptv/countries/pt.m3u",
                "PT",
            ),
            SourceDescriptor::plain_text(
                "freetv_pt",
                "Free-TV Portugal",
                "https://raw.githubusercontent.com/Free-TV/IPTV/master/playlists/playlist_portugal.m3u8",
                "PT",
            ),
            SourceDescriptor::plain_text(
                "iptv_org_ao",
                "IPTV-Org Angola",
                "https://iptv-org.github.io/iptv/countries/ao.m3u",
                "AO",
            ),
            SourceDescriptor::plain_text(
                "iptv_org_mz",
                "IPTV-Org Moçambique",
                "https://iptv-org.github.io/iptv/countries/mz.m3u",
                "MZ",
            ),
            SourceDescriptor::plain_text(
                "iptv_org_cv",
                "IPTV-Org Cabo Verde",
                "https://iptv-org.github.io/iptv/countries/cv.m3u",
                "CV",
            ),
            SourceDescriptor::plain_text(
                "iptv_org_por",
                "IPTV-Org Português",
                "https://iptv-org.github.io/iptv/languages/por.m3u",
                "BR",
            ),
            SourceDescriptor::structured_feed("samsung_us", "Samsung TV Plus US", "us"),
            SourceDescriptor::structured_feed("samsung_gb", "Samsung TV Plus UK", "gb"),
            SourceDescriptor::structured_feed("samsung_ca", "Samsung TV Plus CA", "ca"),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceDescriptor> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Descriptors whose region is an exact member of `target_regions`,
    /// in catalog order
    pub fn active<'a>(
        &'a self,
        target_regions: &'a [String],
    ) -> impl Iterator<Item = &'a SourceDescriptor> + 'a {
        self.sources.iter().filter(move |source| {
            let targeted = target_regions.iter().any(|r| *r == source.region);
            if !targeted {
                debug!(
                    "Skipping source '{}' (region {} not targeted)",
                    source.name, source.region
                );
            }
            targeted
        })
    }
}
