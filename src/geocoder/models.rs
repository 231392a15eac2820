use serde::{Deserialize, Serialize};

// Only the path down to `GeoObject.name` is required, everything else is optional and
// kept around for logging.

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoResult {
    pub response: GeoResponse,
}

impl GeoResult {
    /// Display name of the best match, if the geocoder found anything at all.
    pub fn first_name(&self) -> Option<&str> {
        self.first_object().map(|geo_object| geo_object.name.as_str())
    }

    pub fn first_object(&self) -> Option<&GeoObject> {
        self.response
            .geo_object_collection
            .feature_member
            .first()
            .map(|member| &member.geo_object)
    }

    pub fn found(&self) -> Option<&str> {
        self.response_meta_data().map(|meta| meta.found.as_str())
    }

    /// The query as the geocoder understood it.
    pub fn request(&self) -> Option<&str> {
        self.response_meta_data().map(|meta| meta.request.as_str())
    }

    fn response_meta_data(&self) -> Option<&GeocoderResponseMetaData> {
        self.response
            .geo_object_collection
            .meta_data_property
            .as_ref()
            .map(|meta| &meta.geocoder_response_meta_data)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoResponse {
    #[serde(rename = "GeoObjectCollection")]
    pub geo_object_collection: GeoObjectCollection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoObjectCollection {
    #[serde(default)]
    pub meta_data_property: Option<CollectionMetaDataProperty>,
    #[serde(default)]
    pub feature_member: Vec<FeatureMember>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionMetaDataProperty {
    #[serde(rename = "GeocoderResponseMetaData")]
    pub geocoder_response_meta_data: GeocoderResponseMetaData,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeocoderResponseMetaData {
    #[serde(default)]
    pub request: String,
    #[serde(default)]
    pub found: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureMember {
    #[serde(rename = "GeoObject")]
    pub geo_object: GeoObject,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoObject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meta_data_property: Option<GeoObjectMetaDataProperty>,
    #[serde(default, rename = "Point")]
    pub point: Option<Point>,
}

impl GeoObject {
    pub fn meta_data(&self) -> Option<&GeocoderMetaData> {
        self.meta_data_property
            .as_ref()
            .map(|meta| &meta.geocoder_meta_data)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoObjectMetaDataProperty {
    #[serde(rename = "GeocoderMetaData")]
    pub geocoder_meta_data: GeocoderMetaData,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeocoderMetaData {
    #[serde(default)]
    pub precision: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
}

/// Position as the geocoder writes it: `"<lng> <lat>"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub pos: String,
}
